// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::Result;
use tablero_app::{
    CLIENT_SCHEMA, ChatLog, Client, FAQ_SCHEMA, FaqArticle, ListController, ORDER_SCHEMA, Order,
    PRODUCT_SCHEMA, Product, RecordSet,
};
use tablero_store::{Store, TicketQueue, faq_articles, seed_data};

/// The data behind the view loop: three seeded lists, the knowledge base,
/// the persisted ticket queue, and a session-local chat transcript.
pub struct Dashboard {
    orders: ListController<Order>,
    products: ListController<Product>,
    clients: ListController<Client>,
    faqs: RecordSet<FaqArticle>,
    tickets: TicketQueue,
    chat: ChatLog,
}

impl Dashboard {
    pub fn new(store: Store) -> Result<Self> {
        let seed = seed_data()?;
        Ok(Self {
            orders: ListController::new(ORDER_SCHEMA, seed.orders),
            products: ListController::new(PRODUCT_SCHEMA, seed.products),
            clients: ListController::new(CLIENT_SCHEMA, seed.clients),
            faqs: RecordSet::new(FAQ_SCHEMA, faq_articles()),
            tickets: TicketQueue::open(store),
            chat: ChatLog::new(),
        })
    }
}

impl tablero_tui::AppRuntime for Dashboard {
    fn orders(&mut self) -> &mut ListController<Order> {
        &mut self.orders
    }

    fn products(&mut self) -> &mut ListController<Product> {
        &mut self.products
    }

    fn clients(&mut self) -> &mut ListController<Client> {
        &mut self.clients
    }

    fn faqs(&mut self) -> &mut RecordSet<FaqArticle> {
        &mut self.faqs
    }

    fn tickets(&mut self) -> &mut TicketQueue {
        &mut self.tickets
    }

    fn chat(&mut self) -> &mut ChatLog {
        &mut self.chat
    }
}
