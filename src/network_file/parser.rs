//! Parser für Netzwerk-Dateien.

use super::NetworkFileError;
use crate::core::{NetworkConnection, NetworkModel, NetworkNode, Side};
use glam::DVec2;
use std::path::Path;

/// Token einer Zeile: nacktes Wort oder Text in Anführungszeichen
#[derive(Debug, Clone, PartialEq)]
enum Token<'a> {
    Word(&'a str),
    Quoted(&'a str),
}

/// Zerlegt eine Zeile in Tokens. Quoted-Strings enthalten keine Escapes.
fn tokenize(line: &str) -> Result<Vec<Token<'_>>, String> {
    let mut tokens = Vec::new();
    let mut rest = line.trim_start();
    while !rest.is_empty() {
        if let Some(after_quote) = rest.strip_prefix('"') {
            let end = after_quote
                .find('"')
                .ok_or_else(|| "Anführungszeichen nicht geschlossen".to_string())?;
            tokens.push(Token::Quoted(&after_quote[..end]));
            rest = &after_quote[end + 1..];
            if rest.starts_with(|c: char| !c.is_whitespace()) {
                return Err("Leerzeichen nach Anführungszeichen erwartet".into());
            }
        } else {
            let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
            tokens.push(Token::Word(&rest[..end]));
            rest = &rest[end..];
        }
        rest = rest.trim_start();
    }
    Ok(tokens)
}

fn parse_coordinate(text: &str) -> Result<f64, String> {
    let value: f64 = text
        .parse()
        .map_err(|_| format!("Ungültige Koordinate '{}'", text))?;
    if !value.is_finite() {
        return Err(format!("Koordinate '{}' ist nicht endlich", text));
    }
    Ok(value)
}

fn parse_side(text: &str) -> Result<Side, String> {
    Side::from_code(text).ok_or_else(|| format!("Unbekannte Seite '{}'", text))
}

/// Eine geparste Zeile
enum Entry {
    Node(NetworkNode),
    Connection(NetworkConnection),
}

fn parse_line(tokens: &[Token<'_>]) -> Result<Entry, String> {
    match tokens {
        [Token::Word("N"), Token::Word(x), Token::Word(y), Token::Quoted(name)] => {
            let position = DVec2::new(parse_coordinate(x)?, parse_coordinate(y)?);
            Ok(Entry::Node(NetworkNode::new(*name, position)))
        }
        [Token::Word("C"), Token::Quoted(n1), Token::Word(s1), Token::Quoted(n2), Token::Word(s2)] => {
            Ok(Entry::Connection(NetworkConnection::new(
                *n1,
                parse_side(s1)?,
                *n2,
                parse_side(s2)?,
            )))
        }
        [Token::Word("N"), ..] => Err("Erwartet: N <x> <y> \"<name>\"".into()),
        [Token::Word("C"), ..] => {
            Err("Erwartet: C \"<node1>\" <seite> \"<node2>\" <seite>".into())
        }
        [Token::Word(tag), ..] => Err(format!("Unbekannter Eintrag '{}'", tag)),
        _ => Err("Zeile beginnt nicht mit einem Eintragstyp".into()),
    }
}

/// Parst den Inhalt einer Netzwerk-Datei in Dateireihenfolge.
///
/// Leerzeilen werden übersprungen; jede andere fehlerhafte Zeile lässt das
/// gesamte Laden scheitern.
pub fn parse_network(content: &str) -> Result<NetworkModel, NetworkFileError> {
    let mut model = NetworkModel::new();

    for (line_index, line) in content.lines().enumerate() {
        let line_number = line_index + 1;
        if line.trim().is_empty() {
            continue;
        }
        let malformed = |reason: String| NetworkFileError::Malformed {
            line: line_number,
            reason,
        };
        let tokens = tokenize(line).map_err(malformed)?;
        match parse_line(&tokens).map_err(malformed)? {
            Entry::Node(node) => {
                model
                    .add_node(node)
                    .map_err(|source| NetworkFileError::InvalidModel {
                        line: line_number,
                        source,
                    })?;
            }
            Entry::Connection(connection) => {
                model.add_connection(connection);
            }
        }
    }

    // Frisch geladen gilt als gespeichert
    model.mark_saved();
    log::debug!(
        "Netzwerk geparst: {} Nodes, {} Verbindungen",
        model.node_count(),
        model.connection_count()
    );
    Ok(model)
}

/// Liest und parst eine Netzwerk-Datei.
pub fn load_network_file(path: &Path) -> Result<NetworkModel, NetworkFileError> {
    let content = std::fs::read_to_string(path)?;
    parse_network(&content)
}
