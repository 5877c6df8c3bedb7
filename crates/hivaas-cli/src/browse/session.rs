//! Browse-session state and command dispatch.

use anyhow::Context;
use hivaas_core::{
    share_url, to_share_text, AppConfig, CardOutcome, CatalogStore, Product, Selections,
    Wishlist, WishlistError,
};

use super::command::{BrowseCommand, ImageStep, HELP};
use crate::render;

/// What the loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Step {
    Continue(String),
    Quit,
}

pub(crate) struct Session {
    store: CatalogStore,
    wishlist: Wishlist,
    selections: Selections,
    config: AppConfig,
}

impl Session {
    pub(crate) fn new(store: CatalogStore, config: AppConfig) -> Self {
        Self {
            store,
            wishlist: Wishlist::new(config.notice_ttl()),
            selections: Selections::default(),
            config,
        }
    }

    #[cfg(test)]
    pub(crate) fn wishlist(&self) -> &Wishlist {
        &self.wishlist
    }

    pub(crate) fn page(&self) -> String {
        render::catalog_page(&self.store, &self.wishlist, &self.config.currency_symbol)
    }

    /// Runs one command. Failures are reported as output and never end the
    /// session.
    pub(crate) fn execute(&mut self, cmd: BrowseCommand) -> Step {
        if cmd == BrowseCommand::Quit {
            return Step::Quit;
        }
        match self.dispatch(cmd) {
            Ok(out) => Step::Continue(out),
            Err(e) => Step::Continue(format!("{e:#}\n")),
        }
    }

    fn dispatch(&mut self, cmd: BrowseCommand) -> anyhow::Result<String> {
        let out = match cmd {
            BrowseCommand::Help => format!("{HELP}\n"),
            BrowseCommand::Guide => format!("{}\n", render::USER_GUIDE),
            BrowseCommand::Show => self.page(),
            BrowseCommand::Next => {
                self.store.next_page();
                self.page()
            }
            BrowseCommand::Prev => {
                self.store.prev_page();
                self.page()
            }
            BrowseCommand::Page(n) => {
                self.store.go_to_page(n);
                self.page()
            }
            BrowseCommand::Size(size) => {
                self.store.toggle_size_filter(size);
                self.page()
            }
            BrowseCommand::Type(product_type) => {
                if !self.store.types().contains(&product_type)
                    && !self.store.filters().types.contains(&product_type)
                {
                    anyhow::bail!("unknown type `{product_type}`; see `types`");
                }
                self.store.toggle_type_filter(&product_type);
                self.page()
            }
            BrowseCommand::Search(keyword) => {
                self.store.set_keyword(&keyword);
                self.page()
            }
            BrowseCommand::Sort(sort) => {
                self.store.set_sort(sort);
                self.page()
            }
            BrowseCommand::Clear => {
                self.store.clear_filters();
                self.page()
            }
            BrowseCommand::Types => render::types_list(self.store.types()),
            BrowseCommand::Card(code) => self.card(&code)?,
            BrowseCommand::Pick { code, size } => {
                let product = lookup(&self.store, &code)?;
                let card = self.selections.card_mut(&code);
                if !card.toggle_size(product, size) {
                    tracing::debug!(%code, %size, "size toggle ignored");
                }
                self.card(&code)?
            }
            BrowseCommand::Image { code, step } => {
                let product = lookup(&self.store, &code)?;
                let card = self.selections.card_mut(&code);
                match step {
                    ImageStep::Next => card.next_image(product),
                    ImageStep::Prev => card.prev_image(product),
                }
                self.card(&code)?
            }
            BrowseCommand::View(code) => {
                let product = lookup(&self.store, &code)?;
                match self.selections.card_mut(&code).open_image(product) {
                    Some(url) => format!("Full-size image: {url}\n"),
                    None => "No images available\n".to_string(),
                }
            }
            BrowseCommand::Close(code) => {
                lookup(&self.store, &code)?;
                self.selections.card_mut(&code).close_image();
                "Image closed\n".to_string()
            }
            BrowseCommand::Wish(code) => self.wish(&code)?,
            BrowseCommand::Unwish(code) => {
                self.wishlist.remove(&code);
                let mut out = self.notice();
                out.push_str(&render::wishlist_panel(&self.wishlist));
                out
            }
            BrowseCommand::Wishlist => render::wishlist_panel(&self.wishlist),
            BrowseCommand::Quit => String::new(),
            BrowseCommand::Share => {
                if self.wishlist.is_empty() {
                    anyhow::bail!("Your wishlist is empty.");
                }
                let text = to_share_text(self.wishlist.entries(), &self.config.currency_symbol);
                format!("{text}\n{}\n", share_url(&self.config.share_phone, &text))
            }
            BrowseCommand::Send(code) => {
                let product = lookup(&self.store, &code)?;
                let text = self.selections.card(&code).share_text(product)?;
                format!("{text}\n{}\n", share_url(&self.config.share_phone, &text))
            }
        };
        Ok(out)
    }

    fn card(&self, code: &str) -> anyhow::Result<String> {
        let product = lookup(&self.store, code)?;
        Ok(render::card_detail(
            product,
            &self.selections.card(code),
            self.wishlist.contains(code),
            &self.config.currency_symbol,
        ))
    }

    fn wish(&mut self, code: &str) -> anyhow::Result<String> {
        let product = lookup(&self.store, code)?;
        let card = self.selections.card_mut(code);
        match card.handle_wishlist_action(product, &mut self.wishlist) {
            Ok(CardOutcome::Added | CardOutcome::Removed) => {}
            Err(WishlistError::AlreadyPresent { product_code }) => {
                tracing::debug!(%product_code, "duplicate wishlist add ignored");
            }
            Err(e) => return Err(e.into()),
        }
        Ok(self.notice())
    }

    fn notice(&self) -> String {
        self.wishlist
            .notice()
            .map(|n| format!("{}\n", n.message()))
            .unwrap_or_default()
    }
}

fn lookup<'a>(store: &'a CatalogStore, code: &str) -> anyhow::Result<&'a Product> {
    store
        .product(code)
        .with_context(|| format!("no product with code {code}"))
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
