use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use simplelog::*;

use leadsheet_harmony::{
    HarmonyDistribution, HarmonyEncoder, LeadSheet, RawHarmony, Reduction, SpellingPreference,
};

// -------------------------------------------------------------------------------------------------

/// Count chord symbols and chord kinds of all lead sheets in a directory.
#[derive(Parser, Debug)]
#[clap(name = "harmony-distribution")]
struct CliArgs {
    /// Directory with lead sheet JSON files.
    #[clap(short, long)]
    input: PathBuf,

    /// Directory the reports get written to.
    #[clap(short, long)]
    output: PathBuf,

    /// Count triad reductions. Takes precedence over --simplified.
    #[clap(short, long)]
    triad: bool,

    /// Count simplified reductions.
    #[clap(short, long)]
    simplified: bool,

    /// Spell pre-resolved pitch classes with flats instead of sharps.
    #[clap(long)]
    flats: bool,

    /// Log per file progress.
    #[clap(short, long)]
    verbose: bool,
}

impl CliArgs {
    fn reduction(&self) -> Reduction {
        if self.triad {
            Reduction::Triad
        } else if self.simplified {
            Reduction::Simplified
        } else {
            Reduction::Full
        }
    }

    fn preference(&self) -> SpellingPreference {
        if self.flats {
            SpellingPreference::Flats
        } else {
            SpellingPreference::Sharps
        }
    }
}

// -------------------------------------------------------------------------------------------------

// prefix of the symbol report file names
fn report_prefix(reduction: Reduction) -> &'static str {
    match reduction {
        Reduction::Full => "",
        Reduction::Triad => "triad_",
        Reduction::Simplified => "simple_",
    }
}

fn read_lead_sheets(input: &Path) -> Result<Vec<LeadSheet>> {
    let mut paths = fs::read_dir(input)
        .with_context(|| format!("failed to read input directory '{}'", input.display()))?
        .filter_map(|entry| entry.ok().map(|entry| entry.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect::<Vec<_>>();
    paths.sort();

    let mut sheets = Vec::with_capacity(paths.len());
    for path in paths {
        log::debug!("reading lead sheet '{}'", path.display());
        let json = fs::read_to_string(&path)
            .with_context(|| format!("failed to read '{}'", path.display()))?;
        let sheet = LeadSheet::from_json(&json)
            .with_context(|| format!("failed to parse '{}'", path.display()))?;
        sheets.push(sheet);
    }
    Ok(sheets)
}

fn write_report<F>(path: PathBuf, write: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> std::io::Result<()>,
{
    let mut writer = BufWriter::new(
        File::create(&path).with_context(|| format!("failed to create '{}'", path.display()))?,
    );
    write(&mut writer)
        .and_then(|_| writer.flush())
        .with_context(|| format!("failed to write '{}'", path.display()))
}

fn run(args: &CliArgs) -> Result<HarmonyDistribution> {
    let sheets = read_lead_sheets(&args.input)?;
    log::info!("read {} lead sheets", sheets.len());

    let harmonies = sheets
        .iter()
        .flat_map(|sheet| sheet.harmonies().cloned())
        .collect::<Vec<RawHarmony>>();
    let encoder = HarmonyEncoder::new(args.preference());
    let reduction = args.reduction();
    let distribution = HarmonyDistribution::collect(&encoder, &harmonies, reduction);
    log::info!(
        "{} unique chords found in {} harmonies ({} skipped)",
        distribution.symbols().len(),
        harmonies.len(),
        distribution.failures().len()
    );

    fs::create_dir_all(&args.output).with_context(|| {
        format!("failed to create output directory '{}'", args.output.display())
    })?;
    let prefix = report_prefix(reduction);
    write_report(
        args.output.join(format!("{}harmony_data.json", prefix)),
        |writer| {
            serde_json::to_writer_pretty(&mut *writer, &distribution.symbols_json())
                .map_err(std::io::Error::from)
        },
    )?;
    write_report(args.output.join("harmony_kinds.json"), |writer| {
        serde_json::to_writer_pretty(&mut *writer, &distribution.kinds_json())
            .map_err(std::io::Error::from)
    })?;
    write_report(
        args.output.join(format!("{}harmony_sorted_dist.txt", prefix)),
        |writer| distribution.write_symbol_counts(writer),
    )?;
    write_report(args.output.join("harmony_kinds_sorted.txt"), |writer| {
        distribution.write_kind_counts(writer)
    })?;
    Ok(distribution)
}

// -------------------------------------------------------------------------------------------------

fn main() -> Result<()> {
    let args = CliArgs::parse();

    // init logging
    TermLogger::init(
        if args.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        },
        ConfigBuilder::default().build(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .unwrap_or_else(|err| {
        log::error!("init_logger error: {:?}", err);
    });

    run(&args)?;
    Ok(())
}

// --------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    const SHEET: &str = r#"{"part": {"measures": [
        {"groups": [{"harmony": {"root": "C", "kind": "major-seventh"}}]},
        {"groups": [{"harmony": {"root": "A", "kind": "minor-seventh"}}]},
        {"groups": [{"harmony": {"root": "D", "kind": "minor-seventh"}}]},
        {"groups": [{"harmony": {"root": "G", "kind": "dominant"}}]},
        {"groups": [{"harmony": {"root": "G", "kind": "qwe"}}]}
    ]}}"#;

    fn args(input: &Path, output: &Path, triad: bool, simplified: bool) -> CliArgs {
        CliArgs {
            input: input.to_path_buf(),
            output: output.to_path_buf(),
            triad,
            simplified,
            flats: false,
            verbose: false,
        }
    }

    #[test]
    fn reports() -> Result<()> {
        let input = tempfile::tempdir()?;
        let output = tempfile::tempdir()?;
        fs::write(input.path().join("sheet.json"), SHEET)?;
        fs::write(input.path().join("notes.txt"), "not a lead sheet")?;

        let distribution = run(&args(input.path(), output.path(), false, false))?;
        assert_eq!(distribution.len(), 4);
        assert_eq!(distribution.failures().len(), 1);

        let symbols = fs::read_to_string(output.path().join("harmony_sorted_dist.txt"))?;
        assert_eq!(symbols, "Cmaj7:\t\t1\nAm7:\t\t1\nDm7:\t\t1\nG7:\t\t1\n");
        let kinds = fs::read_to_string(output.path().join("harmony_kinds_sorted.txt"))?;
        assert_eq!(kinds, "minor:\t\t2\nmajor:\t\t1\ndominant:\t\t1\n");

        let data: serde_json::Value = serde_json::from_str(&fs::read_to_string(
            output.path().join("harmony_data.json"),
        )?)?;
        assert_eq!(data["Am7"]["harte"], "A:min7");
        assert!(output.path().join("harmony_kinds.json").exists());
        Ok(())
    }

    #[test]
    fn triad_precedence() -> Result<()> {
        let input = tempfile::tempdir()?;
        let output = tempfile::tempdir()?;
        fs::write(input.path().join("sheet.json"), SHEET)?;

        run(&args(input.path(), output.path(), true, true))?;
        let symbols = fs::read_to_string(output.path().join("triad_harmony_sorted_dist.txt"))?;
        assert_eq!(symbols, "C:\t\t1\nAm:\t\t1\nDm:\t\t1\nG:\t\t1\n");
        assert!(!output.path().join("simple_harmony_sorted_dist.txt").exists());
        Ok(())
    }

    #[test]
    fn missing_input() {
        let output = tempfile::tempdir().unwrap();
        let missing = output.path().join("missing");
        assert!(run(&args(&missing, output.path(), false, false)).is_err());
    }
}
