//! Assemblage de l'historique en un programme compilable.
//!
//! Les fragments sont placés dans un bloc dont la valeur est capturée par
//! `_rust_result`, puis affichée avec `{:?}`. Le dernier fragment reste sans
//! `;` : c'est l'expression de queue du bloc.

use crate::history::History;

pub const PROLOGUE: &str = "\n//--- BEGIN ---\nfn main() {\n\tlet _rust_result = {\n\t\t";
pub const EPILOGUE: &str = "\n\t};\n\tprintln!(\"{:?}\", _rust_result);\n}\n//---- END ----";
pub const SEPARATOR: &str = "\n\t\t";
pub const TERMINATOR: char = ';';

/// Rend le programme complet pour `history`, ou `None` si l'historique est vide.
pub fn assemble(history: &History) -> Option<String> {
    let last = history.len().checked_sub(1)?;
    let body = history
        .iter()
        .enumerate()
        .map(|(i, f)| {
            let text = f.as_str();
            if (i < last || is_binding(text)) && !text.ends_with(TERMINATOR) {
                terminate(text)
            } else {
                text.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(SEPARATOR);
    Some(format!("{PROLOGUE}{body}{EPILOGUE}"))
}

/// Un `//` avale la fin de ligne : le `;` passe alors sur la ligne suivante.
fn terminate(text: &str) -> String {
    if text.contains("//") {
        format!("{text}\n{TERMINATOR}")
    } else {
        format!("{text}{TERMINATOR}")
    }
}

/// Un `let` ne peut pas servir de valeur de queue : on le termine même en dernière position.
fn is_binding(text: &str) -> bool {
    text.strip_prefix("let")
        .is_some_and(|rest| rest.starts_with(|c: char| c.is_whitespace() || c == '('))
}
