use fconv::error::{ConvertError, Result};
use fconv::store::{Row, State, Store};
use fconv::types::{Context, Direction};

pub enum RowsOp {
    List {
        json: bool,
    },
    Add {
        text: String,
        encoded: bool,
        format: Option<String>,
    },
    Set {
        index: usize,
        text: String,
        encoded: bool,
    },
    Rm {
        index: usize,
    },
    Clear,
    Format {
        key: Option<String>,
    },
}

/// Workspace of saved plain/encoded pairs. One side of a row is always given
/// verbatim; the other is derived through the registry with the active
/// format. Indices are 1-based as printed by `list`.
pub fn run_rows(ctx: &Context, store: &Store, op: &RowsOp) -> Result<()> {
    let mut state = store.load();

    match op {
        RowsOp::List { json } => {
            if *json {
                println!("{}", serde_json::to_string_pretty(&state).unwrap());
                return Ok(());
            }
            println!("format: {}", state.format);
            if state.rows.is_empty() {
                println!("(no rows)");
            } else {
                for (i, row) in state.rows.iter().enumerate() {
                    println!(
                        "{:>3}  {:<34} {}",
                        i + 1,
                        cell(&row.plain, 32),
                        cell(&row.encoded, 40)
                    );
                }
            }
        }

        RowsOp::Add {
            text,
            encoded,
            format,
        } => {
            let key = match format {
                Some(f) => ctx.registry.get(f)?.key().to_string(),
                None => state.format.clone(),
            };
            let row = derive_row(ctx, &key, text, *encoded)?;
            state.rows.push(row.clone());
            store.save(&state)?;
            println!(
                "row {}: \"{}\" <-> \"{}\"",
                state.rows.len(),
                row.plain,
                row.encoded
            );
        }

        RowsOp::Set {
            index,
            text,
            encoded,
        } => {
            check_index(&state, *index)?;
            let row = derive_row(ctx, &state.format, text, *encoded)?;
            state.rows[*index - 1] = row.clone();
            store.save(&state)?;
            println!("row {}: \"{}\" <-> \"{}\"", index, row.plain, row.encoded);
        }

        RowsOp::Rm { index } => {
            check_index(&state, *index)?;
            state.rows.remove(*index - 1);
            store.save(&state)?;
            println!("row {} removed", index);
        }

        RowsOp::Clear => {
            let n = state.rows.len();
            state.rows.clear();
            store.save(&state)?;
            println!("{} row(s) cleared", n);
        }

        RowsOp::Format { key } => match key {
            None => println!("{}", state.format),
            Some(key) => {
                let new_key = ctx.registry.get(key)?.key();
                // Every plain side must re-encode under the new format
                // before the switch is committed.
                for row in &mut state.rows {
                    row.encoded =
                        ctx.registry.convert(new_key, Direction::Encode, &row.plain)?;
                }
                state.format = new_key.to_string();
                store.save(&state)?;
                println!(
                    "format set to {} ({} row(s) re-encoded)",
                    new_key,
                    state.rows.len()
                );
            }
        },
    }

    Ok(())
}

fn derive_row(ctx: &Context, format: &str, text: &str, encoded: bool) -> Result<Row> {
    if encoded {
        let plain = ctx.registry.convert(format, Direction::Decode, text.trim())?;
        Ok(Row {
            plain,
            encoded: text.to_string(),
        })
    } else {
        let derived = ctx.registry.convert(format, Direction::Encode, text)?;
        Ok(Row {
            plain: text.to_string(),
            encoded: derived,
        })
    }
}

fn check_index(state: &State, index: usize) -> Result<()> {
    if index == 0 || index > state.rows.len() {
        return Err(ConvertError::invalid_input(format!(
            "no row {} (the workspace has {})",
            index,
            state.rows.len()
        )));
    }
    Ok(())
}

fn cell(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        let cut: String = s.chars().take(max - 3).collect();
        format!("{}...", cut)
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_store() -> (tempfile::TempDir, Store) {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(Some(dir.path().join("state.json")));
        (dir, store)
    }

    #[test]
    fn test_add_derives_encoded_side() {
        let ctx = Context::default();
        let (_dir, store) = test_store();

        run_rows(
            &ctx,
            &store,
            &RowsOp::Add {
                text: "Hello".to_string(),
                encoded: false,
                format: None,
            },
        )
        .unwrap();

        let state = store.load();
        assert_eq!(state.rows.len(), 1);
        assert_eq!(state.rows[0].plain, "Hello");
        assert_eq!(state.rows[0].encoded, "SGVsbG8=");
    }

    #[test]
    fn test_add_encoded_derives_plain_side() {
        let ctx = Context::default();
        let (_dir, store) = test_store();

        run_rows(
            &ctx,
            &store,
            &RowsOp::Add {
                text: "SGVsbG8=".to_string(),
                encoded: true,
                format: None,
            },
        )
        .unwrap();

        let state = store.load();
        assert_eq!(state.rows[0].plain, "Hello");
        assert_eq!(state.rows[0].encoded, "SGVsbG8=");
    }

    #[test]
    fn test_add_with_format_override_does_not_persist_it() {
        let ctx = Context::default();
        let (_dir, store) = test_store();

        run_rows(
            &ctx,
            &store,
            &RowsOp::Add {
                text: "Hello".to_string(),
                encoded: false,
                format: Some("hex".to_string()),
            },
        )
        .unwrap();

        let state = store.load();
        assert_eq!(state.rows[0].encoded, "48656c6c6f");
        assert_eq!(state.format, "base64");
    }

    #[test]
    fn test_set_replaces_and_rederives() {
        let ctx = Context::default();
        let (_dir, store) = test_store();

        let mut state = State::default();
        state.rows.push(Row {
            plain: "old".to_string(),
            encoded: "b2xk".to_string(),
        });
        store.save(&state).unwrap();

        run_rows(
            &ctx,
            &store,
            &RowsOp::Set {
                index: 1,
                text: "new".to_string(),
                encoded: false,
            },
        )
        .unwrap();

        let state = store.load();
        assert_eq!(state.rows[0].plain, "new");
        assert_eq!(state.rows[0].encoded, "bmV3");
    }

    #[test]
    fn test_rm_and_clear() {
        let ctx = Context::default();
        let (_dir, store) = test_store();

        let mut state = State::default();
        for text in ["a", "b", "c"] {
            state.rows.push(derive_row(&ctx, "base64", text, false).unwrap());
        }
        store.save(&state).unwrap();

        run_rows(&ctx, &store, &RowsOp::Rm { index: 2 }).unwrap();
        let state = store.load();
        assert_eq!(state.rows.len(), 2);
        assert_eq!(state.rows[1].plain, "c");

        run_rows(&ctx, &store, &RowsOp::Clear).unwrap();
        assert!(store.load().rows.is_empty());
    }

    #[test]
    fn test_bad_index_is_error() {
        let ctx = Context::default();
        let (_dir, store) = test_store();

        let err = run_rows(&ctx, &store, &RowsOp::Rm { index: 1 }).unwrap_err();
        assert!(err.to_string().contains("no row 1"));
    }

    #[test]
    fn test_format_switch_reencodes_rows() {
        let ctx = Context::default();
        let (_dir, store) = test_store();

        run_rows(
            &ctx,
            &store,
            &RowsOp::Add {
                text: "Hello".to_string(),
                encoded: false,
                format: None,
            },
        )
        .unwrap();

        run_rows(
            &ctx,
            &store,
            &RowsOp::Format {
                key: Some("hex".to_string()),
            },
        )
        .unwrap();

        let state = store.load();
        assert_eq!(state.format, "hex");
        assert_eq!(state.rows[0].encoded, "48656c6c6f");
    }
}
