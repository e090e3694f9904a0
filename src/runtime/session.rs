//! # Interactive Session
//!
//! The text loop that lets an operator browse the menu, build an order and
//! finalize it. The session only talks to [`Restaurant`] and [`Order`] through
//! their public operations.
//!
//! The loop is generic over its input and output streams, so it runs against
//! stdin/stdout in the binary and against in-memory buffers in tests.
//!
//! ```text
//! Idle -> Browsing -> Building Order -> Finalizing -> Idle
//! ```
//!
//! Every operational error (bad selection, failed persist) is reported to the
//! operator and the loop carries on. End of input behaves like choosing "Sair".

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info, warn};

use crate::model::{MenuItem, Order};
use crate::restaurant::Restaurant;

/// Errors raised inside the interactive session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The operator picked something that is not a menu position.
    #[error("Invalid selection '{input}': expected a number between 1 and {menu_len}")]
    InvalidSelection { input: String, menu_len: usize },

    /// Reading from or writing to the terminal failed.
    #[error("Terminal I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Options of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ShowMenu,
    AddItem,
    ViewOrder,
    Finalize,
    Exit,
}

impl Command {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Command::ShowMenu),
            "2" => Some(Command::AddItem),
            "3" => Some(Command::ViewOrder),
            "4" => Some(Command::Finalize),
            "5" => Some(Command::Exit),
            _ => None,
        }
    }
}

pub struct Session<R, W> {
    restaurant: Restaurant,
    order: Order,
    orders_path: PathBuf,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(restaurant: Restaurant, orders_path: impl Into<PathBuf>, input: R, output: W) -> Self {
        Self {
            restaurant,
            order: Order::new(),
            orders_path: orders_path.into(),
            input,
            output,
        }
    }

    pub fn restaurant(&self) -> &Restaurant {
        &self.restaurant
    }

    pub fn current_order(&self) -> &Order {
        &self.order
    }

    /// Consumes the session, handing back the restaurant and the output stream.
    pub fn into_parts(self) -> (Restaurant, W) {
        (self.restaurant, self.output)
    }

    /// Runs the loop until the operator exits or input ends.
    ///
    /// # Errors
    /// Only terminal I/O failures end the loop with an error.
    pub fn run(&mut self) -> Result<(), SessionError> {
        info!(menu_items = self.restaurant.menu_items().len(), "Session started");
        loop {
            self.print_options()?;
            let Some(choice) = self.prompt("Escolha uma opção: ")? else {
                writeln!(self.output, "Saindo...")?;
                break;
            };

            match Command::parse(&choice) {
                Some(Command::ShowMenu) => self.show_menu()?,
                Some(Command::AddItem) => self.add_item()?,
                Some(Command::ViewOrder) => self.view_order()?,
                Some(Command::Finalize) => self.finalize()?,
                Some(Command::Exit) => {
                    writeln!(self.output, "Saindo...")?;
                    break;
                }
                None => writeln!(self.output, "Opção inválida. Tente novamente.")?,
            }
        }
        self.output.flush()?;
        info!(finalized = self.restaurant.finalized_orders().len(), "Session ended");
        Ok(())
    }

    /// Resolves raw operator input to a menu item.
    ///
    /// # Errors
    /// [`SessionError::InvalidSelection`] unless the input is a 1-based menu position.
    pub fn select(&self, input: &str) -> Result<Arc<MenuItem>, SessionError> {
        let input = input.trim();
        input
            .parse::<usize>()
            .ok()
            .and_then(|index| self.restaurant.menu_item(index))
            .cloned()
            .ok_or_else(|| SessionError::InvalidSelection {
                input: input.to_string(),
                menu_len: self.restaurant.menu_items().len(),
            })
    }

    fn print_options(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n=== BUTECO DO BARTHO ===")?;
        writeln!(self.output, "1. Exibir Menu")?;
        writeln!(self.output, "2. Adicionar Item ao Pedido")?;
        writeln!(self.output, "3. Ver Pedido Atual")?;
        writeln!(self.output, "4. Finalizar Pedido")?;
        writeln!(self.output, "5. Sair")
    }

    /// Writes `message` and reads one line. `None` means end of input.
    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn show_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n--- Menu ---")?;
        writeln!(self.output, "{:<4} {:<20} {:>10} {:<25}", "ID", "Item", "Preço", "Descrição")?;
        writeln!(self.output, "{}", "-".repeat(70))?;
        for (i, item) in self.restaurant.menu_items().iter().enumerate() {
            writeln!(
                self.output,
                "{:<4} {:<20} R${:>9.2} {:<25}",
                i + 1,
                item.name(),
                item.price(),
                item.description()
            )?;
        }
        Ok(())
    }

    fn add_item(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n--- Adicionar ao Pedido ---")?;
        writeln!(self.output, "{:<4} {:<20} {:>10}", "ID", "Item", "Preço")?;
        writeln!(self.output, "{}", "-".repeat(35))?;
        for (i, item) in self.restaurant.menu_items().iter().enumerate() {
            writeln!(self.output, "{:<4} {:<20} R${:>9.2}", i + 1, item.name(), item.price())?;
        }

        let Some(choice) = self.prompt("Digite o número do item que deseja adicionar: ")? else {
            return Ok(());
        };

        match self.select(&choice) {
            Ok(item) => {
                writeln!(self.output, "{} adicionado ao pedido!", item.name())?;
                self.order.add_item(item);
            }
            Err(e) => {
                warn!(error = %e, "Rejected menu selection");
                writeln!(self.output, "Opção inválida!")?;
            }
        }
        Ok(())
    }

    fn view_order(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n--- Pedido Atual ---")?;
        writeln!(self.output, "{}", self.order.render())
    }

    fn finalize(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n--- Finalizando Pedido ---")?;
        self.restaurant.finalize_order(&self.order);

        match self.restaurant.persist_orders(&self.orders_path) {
            Ok(()) => writeln!(self.output, "Pedido finalizado e enviado para a cozinha!")?,
            Err(e) => {
                // The snapshot stays in memory and is written with the next finalize.
                error!(error = %e, "Order finalized but not saved");
                writeln!(self.output, "Pedido finalizado, mas não foi possível salvar: {}", e)?;
            }
        }

        self.order.clear();
        Ok(())
    }
}
