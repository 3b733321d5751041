//! # Shell Commands
//!
//! Parsing and dispatch for the line-oriented storefront shell.
//!
//! ## Command Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    One Shell Line                                       │
//! │                                                                         │
//! │  "add 3" ──► Command::parse() ──► Command::Add(3)                       │
//! │                                        │                                │
//! │                                        ▼                                │
//! │                          execute(&mut Storefront, ..)                   │
//! │                                        │                                │
//! │                                        ▼                                │
//! │                     snapshot ──► view-models ──► render ──► stdout      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Commands
//! | Command          | Aliases        | Effect                              |
//! |------------------|----------------|-------------------------------------|
//! | `list`           | `ls`           | Product grid                        |
//! | `view <id>`      | `show`         | Product detail                      |
//! | `close`          |                | Close the product detail            |
//! | `add <id>`       |                | Add one to cart                     |
//! | `inc <id>`       | `+`            | Cart line quantity +1               |
//! | `dec <id>`       | `-`            | Cart line quantity -1               |
//! | `remove <id>`    | `rm`           | Drop the cart line                  |
//! | `wish <id>`      |                | Toggle wishlist                     |
//! | `unwish <id>`    |                | Remove from wishlist                |
//! | `cart`           |                | Cart contents and total             |
//! | `wishlist`       | `wl`           | Wishlist contents                   |
//! | `clear`          |                | Empty the cart                      |
//! | `reload`         |                | Fetch products again                |
//! | `help`           | `?`            | Command list                        |
//! | `quit`           | `exit`, `q`    | Leave the shell                     |

pub mod render;

use storefront_catalog::ProductSource;
use storefront_core::view::{cart_view, product_cards, wishlist_view, ProductDetail};
use storefront_core::ProductId;
use tracing::debug;

use crate::error::CliError;
use crate::state::Storefront;

/// A parsed shell line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    View(ProductId),
    Close,
    Add(ProductId),
    Increase(ProductId),
    Decrease(ProductId),
    Remove(ProductId),
    Wish(ProductId),
    Unwish(ProductId),
    Cart,
    Wishlist,
    Clear,
    Reload,
    Help,
    Quit,
}

impl Command {
    /// Parses one line of input. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Command>, CliError> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Ok(None);
        };
        let verb = verb.to_lowercase();
        let arg = words.next();

        if let Some(extra) = words.next() {
            return Err(CliError::invalid_command(format!(
                "Unexpected argument '{}' for '{}'",
                extra, verb
            )));
        }

        let command = match verb.as_str() {
            "list" | "ls" => no_arg(Command::List, &verb, arg)?,
            "close" => no_arg(Command::Close, &verb, arg)?,
            "cart" => no_arg(Command::Cart, &verb, arg)?,
            "wishlist" | "wl" => no_arg(Command::Wishlist, &verb, arg)?,
            "clear" => no_arg(Command::Clear, &verb, arg)?,
            "reload" => no_arg(Command::Reload, &verb, arg)?,
            "help" | "?" => no_arg(Command::Help, &verb, arg)?,
            "quit" | "exit" | "q" => no_arg(Command::Quit, &verb, arg)?,
            "view" | "show" => Command::View(id_arg(&verb, arg)?),
            "add" => Command::Add(id_arg(&verb, arg)?),
            "inc" | "+" => Command::Increase(id_arg(&verb, arg)?),
            "dec" | "-" => Command::Decrease(id_arg(&verb, arg)?),
            "remove" | "rm" => Command::Remove(id_arg(&verb, arg)?),
            "wish" => Command::Wish(id_arg(&verb, arg)?),
            "unwish" => Command::Unwish(id_arg(&verb, arg)?),
            other => {
                return Err(CliError::invalid_command(format!(
                    "Unknown command '{}'. Type 'help' for a list of commands.",
                    other
                )))
            }
        };

        Ok(Some(command))
    }
}

fn no_arg(command: Command, verb: &str, arg: Option<&str>) -> Result<Command, CliError> {
    match arg {
        None => Ok(command),
        Some(arg) => Err(CliError::invalid_command(format!(
            "'{}' takes no argument, got '{}'",
            verb, arg
        ))),
    }
}

fn id_arg(verb: &str, arg: Option<&str>) -> Result<ProductId, CliError> {
    let arg = arg.ok_or_else(|| CliError::invalid_command(format!("Usage: {} <id>", verb)))?;
    Ok(arg.parse::<ProductId>().unwrap_or_else(|never| match never {}))
}

/// What the shell should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Text(String),
    Quit,
}

/// Runs a command against the store and renders the result.
pub async fn execute<S: ProductSource>(
    store: &mut Storefront<S>,
    command: Command,
    symbol: &str,
) -> Result<Reply, CliError> {
    debug!(?command, "Executing command");

    let text = match command {
        Command::List => {
            let snapshot = store.snapshot();
            match &snapshot.load_error {
                Some(message) if snapshot.products.is_empty() => render::load_error(message),
                _ => render::product_grid(&product_cards(&snapshot.products, symbol)),
            }
        }
        Command::View(id) => {
            let product = store.view_product(&id)?;
            render::product_detail(&ProductDetail::new(&product, symbol))
        }
        Command::Close => {
            store.close_product();
            String::new()
        }
        Command::Add(id) => {
            store.add_to_cart(&id)?;
            String::new()
        }
        Command::Increase(id) => {
            store.increase(&id);
            render::cart(&cart_view(&store.snapshot().cart, symbol))
        }
        Command::Decrease(id) => {
            store.decrease(&id);
            render::cart(&cart_view(&store.snapshot().cart, symbol))
        }
        Command::Remove(id) => {
            if store.remove_from_cart(&id) {
                String::new()
            } else {
                format!("Product {} is not in your cart", id)
            }
        }
        Command::Wish(id) => {
            store.toggle_wishlist(&id)?;
            String::new()
        }
        Command::Unwish(id) => {
            if store.remove_from_wishlist(&id) {
                String::new()
            } else {
                format!("Product {} is not in your wishlist", id)
            }
        }
        Command::Cart => render::cart(&cart_view(&store.snapshot().cart, symbol)),
        Command::Wishlist => render::wishlist(&wishlist_view(&store.snapshot().wishlist, symbol)),
        Command::Clear => {
            store.clear_cart();
            String::new()
        }
        Command::Reload => match store.load_products().await {
            Ok(count) => format!("Loaded {} products", count),
            Err(e) => render::load_error(&e.message),
        },
        Command::Help => render::help(),
        Command::Quit => return Ok(Reply::Quit),
    };

    Ok(Reply::Text(text))
}
