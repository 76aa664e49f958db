// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

pub mod chat;
pub mod controller;
pub mod forms;
pub mod ids;
pub mod model;
pub mod records;
pub mod rows;
pub mod state;
pub mod tasks;

pub use chat::*;
pub use controller::*;
pub use forms::*;
pub use ids::*;
pub use model::*;
pub use records::*;
pub use rows::*;
pub use state::*;
pub use tasks::*;
