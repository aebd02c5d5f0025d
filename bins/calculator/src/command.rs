//! Line commands accepted by the terminal front end.

use flipcalc_core::Edit;
use flipcalc_core::ledger::ExpenseLedger;
use thiserror::Error;

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Change one field, then re-render.
    Edit(Edit),
    /// Re-render without changes.
    Show,
    /// Print the command list.
    Help,
    /// Leave the loop.
    Quit,
}

/// Input lines that name no command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// First word is neither a command nor an expense id.
    #[error("Comando desconocido: {0}")]
    Unknown(String),

    /// `set` without an expense id.
    #[error("Falta la clave del gasto")]
    MissingExpenseId,

    /// A configured expense id is also a command word.
    #[error("La clave de gasto `{0}` es una palabra reservada")]
    ReservedId(String),
}

/// Words `parse` reads as commands before looking up expense ids.
pub const KEYWORDS: &[&str] = &[
    "propiedad", "property", "precio", "price", "set", "mostrar", "show", "ayuda", "help",
    "?", "salir", "quit", "exit",
];

/// Rejects a ledger whose ids would be shadowed by a command word.
pub fn check_ids(expenses: &ExpenseLedger) -> Result<(), CommandError> {
    match expenses
        .iter()
        .find(|entry| KEYWORDS.contains(&entry.id().as_str().to_lowercase().as_str()))
    {
        Some(entry) => Err(CommandError::ReservedId(entry.id().to_string())),
        None => Ok(()),
    }
}

/// Parses one input line.
///
/// Blank lines yield `Ok(None)`. Values are passed on raw; coercion to an
/// amount happens when the edit is built, so a missing or malformed value
/// means zero.
pub fn parse(line: &str, expenses: &ExpenseLedger) -> Result<Option<Command>, CommandError> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Ok(None);
    };
    let rest = words.collect::<Vec<_>>().join(" ");

    let command = match head.to_lowercase().as_str() {
        "propiedad" | "property" => Command::Edit(Edit::property_amount_from_input(&rest)),
        "precio" | "price" => Command::Edit(Edit::commercial_price_from_input(&rest)),
        "set" => {
            let mut parts = rest.splitn(2, ' ');
            let id = parts
                .next()
                .filter(|id| !id.is_empty())
                .ok_or(CommandError::MissingExpenseId)?;
            Command::Edit(Edit::expense_from_input(id, parts.next().unwrap_or_default()))
        }
        "mostrar" | "show" => Command::Show,
        "ayuda" | "help" | "?" => Command::Help,
        "salir" | "quit" | "exit" => Command::Quit,
        _ if expenses.get(&head.into()).is_some() => {
            Command::Edit(Edit::expense_from_input(head, &rest))
        }
        _ => return Err(CommandError::Unknown(head.to_string())),
    };

    Ok(Some(command))
}

/// Command reference listing the editable expense ids.
pub fn help(expenses: &ExpenseLedger) -> String {
    let ids = expenses
        .iter()
        .map(|entry| entry.id().as_str())
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "Comandos:\n\
         \x20 propiedad <monto>     Monto de la Propiedad\n\
         \x20 precio <monto>        Precio Comercial Total\n\
         \x20 <clave> <monto>       Monto de un gasto (también: set <clave> <monto>)\n\
         \x20 mostrar               Volver a mostrar el reporte\n\
         \x20 ayuda                 Esta ayuda\n\
         \x20 salir                 Terminar\n\
         Claves: {ids}\n"
    )
}
