use super::SpecialCase;
use crate::error::{CaseError, Result};
use std::collections::HashMap;
use std::sync::OnceLock;
use tracing::trace;

static BUILTIN_TABLES: OnceLock<Result<HashMap<String, SpecialCase>>> = OnceLock::new();

macro_rules! embed_case_table {
    ($code:expr, $path:expr) => {
        ($code, include_str!($path))
    };
}

fn load_embedded_tables() -> Result<HashMap<String, SpecialCase>> {
    let mut tables = HashMap::new();

    let embedded_tables = [
        embed_case_table!("tr", "../../configs/turkish.toml"),
        embed_case_table!("az", "../../configs/azeri.toml"),
    ];

    for (code, toml_content) in embedded_tables {
        trace!(code, "parsing embedded case table");
        let table = SpecialCase::from_toml_str(toml_content).map_err(|e| {
            CaseError::Configuration(format!("Failed to load embedded {code} table: {e}"))
        })?;

        // Validate that the table code matches
        if table.code() != code {
            return Err(CaseError::Configuration(format!(
                "Table code mismatch: expected {}, got {}",
                code,
                table.code()
            )));
        }

        tables.insert(code.to_string(), table);
    }

    Ok(tables)
}

fn tables() -> Result<&'static HashMap<String, SpecialCase>> {
    BUILTIN_TABLES
        .get_or_init(load_embedded_tables)
        .as_ref()
        .map_err(Clone::clone)
}

pub(super) fn builtin_table(code: &str) -> Result<&'static SpecialCase> {
    tables()?
        .get(code)
        .ok_or_else(|| CaseError::UnknownTable(code.to_string()))
}

/// Codes of the embedded case tables, sorted.
pub fn list_builtin_tables() -> Result<Vec<&'static str>> {
    let mut codes: Vec<&'static str> = tables()?.keys().map(|s| s.as_str()).collect();
    codes.sort_unstable();
    Ok(codes)
}
