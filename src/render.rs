//! Fixed-width output for the two display paths.

use std::io::{self, Write};

use rust_decimal::{Decimal, RoundingStrategy};

use crate::{component::ComponentRecord, config::ShellConfig, core::traversal::TraversalQueue};

pub const EMPTY_INVENTORY: &str = "No components in inventory.";
pub const EMPTY_QUEUE: &str = "Queue is empty. No component to display.";

const RULE_WIDTH: usize = 59;

/// Two decimal places, midpoint away from zero.
pub fn format_price(price: Decimal) -> String {
    let mut rounded = price.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded.to_string()
}

/// Writes records as a table in iteration order, or the empty-inventory line.
pub fn write_table<'a, W, I>(out: &mut W, records: I, cfg: &ShellConfig) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a ComponentRecord>,
{
    let mut records = records.into_iter().peekable();
    if records.peek().is_none() {
        writeln!(out, "{EMPTY_INVENTORY}")?;
        return Ok(());
    }

    writeln!(out)?;
    writeln!(out, "Components in Inventory:")?;
    writeln!(
        out,
        "{:<5} {:<20} {:<10} {:<10} {}",
        "ID", "Name", "Price", "Quantity", "Description"
    )?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
    for rec in records {
        writeln!(
            out,
            "{:<5} {:<20} {}{:<9} {:<10} {}",
            rec.id,
            rec.name,
            cfg.table_currency,
            format_price(rec.price),
            rec.quantity,
            rec.description
        )?;
    }
    Ok(())
}

/// Drains `queue`, writing one line per record in dequeue order.
pub fn write_queue<W: Write>(
    out: &mut W,
    mut queue: TraversalQueue<'_>,
    cfg: &ShellConfig,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "--- Components in Queue ---")?;
    while !queue.is_empty() {
        match queue.dequeue() {
            Some(rec) => writeln!(
                out,
                "ID: {}, Name: {}, Price: {}{}, Quantity: {}, Description: {}",
                rec.id,
                rec.name,
                cfg.queue_currency,
                format_price(rec.price),
                rec.quantity,
                rec.description
            )?,
            None => writeln!(out, "{EMPTY_QUEUE}")?,
        }
    }
    Ok(())
}
