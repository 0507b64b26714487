use clap::Args;
use receipt_rewards::error::AppError;
use receipt_rewards::receipts::{breakdown, Receipt};
use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Path to a receipt JSON document
    pub(crate) path: PathBuf,
    /// List the contribution of every scoring rule
    #[arg(long)]
    pub(crate) breakdown: bool,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let file = File::open(&args.path)?;
    let receipt = load_receipt(BufReader::new(file))?;
    print!("{}", render_score(&receipt, args.breakdown));
    Ok(())
}

fn load_receipt<R: Read>(reader: R) -> Result<Receipt, AppError> {
    Ok(serde_json::from_reader(reader)?)
}

fn render_score(receipt: &Receipt, with_breakdown: bool) -> String {
    let audit = breakdown(receipt);
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{} on {} at {}: {} points",
        receipt.retailer, receipt.purchase_date, receipt.purchase_time, audit.total
    );

    if with_breakdown {
        let _ = writeln!(out, "\nRule breakdown");
        for component in &audit.components {
            let _ = writeln!(out, "- {}: {}", component.rule.label(), component.points);
        }
    }

    out
}
