use crate::core::data_manager::DataManager;
use crate::core::PokemonService;
use crate::utils::error::{ErrorSeverity, Result};
use std::io::Write;

/// Outcome of looking up a list of names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupReport {
    pub found: usize,
    pub failed: usize,
    /// Most severe failure seen, `None` when every lookup succeeded.
    pub worst: Option<ErrorSeverity>,
}

impl LookupReport {
    pub fn exit_code(&self) -> i32 {
        self.worst.map(ErrorSeverity::exit_code).unwrap_or(0)
    }
}

/// Looks `names` up one after another, writing each record as a JSON line to
/// `out`. Lookup failures are reported and folded into the report; only a
/// failure to write the output aborts the run.
pub async fn lookup_all<S, W>(
    data_manager: &DataManager<S>,
    names: &[String],
    out: &mut W,
) -> Result<LookupReport>
where
    S: PokemonService,
    W: Write,
{
    let mut report = LookupReport::default();

    for name in names {
        match data_manager.get_pokemon(name).await {
            Ok(pokemon) => {
                serde_json::to_writer(&mut *out, &pokemon)?;
                writeln!(out)?;
                report.found += 1;
            }
            Err(e) => {
                tracing::error!(
                    "Lookup for '{}' failed: {} (Severity: {:?})",
                    name,
                    e,
                    e.severity()
                );
                eprintln!("❌ {}", e);
                eprintln!("💡 {}", e.recovery_suggestion());
                report.failed += 1;
                report.worst = report.worst.max(Some(e.severity()));
            }
        }
    }

    tracing::info!(
        "Looked up {} names: {} found, {} failed",
        names.len(),
        report.found,
        report.failed
    );
    Ok(report)
}
