use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{info, info_span, warn};

use signrom_codec::{
    EditMode, PLANE_LEN, PREDEFINED_PATTERNS, decode, encode, format_grid, read_import,
    read_planes, reassemble, write_planes,
};

use crate::cli::{EncodeArgs, ImportArgs, InspectArgs, SourceArgs};
use crate::summary::{apply_table_style, header_cell};
use crate::types::{EncodeResult, ImportResult, InspectResult};
use signrom_cli::source::ImageSource;

pub fn run_patterns() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Pattern"), header_cell("Lit"), header_cell("Grid")]);
    apply_table_style(&mut table);
    for pattern in &PREDEFINED_PATTERNS {
        let matrix = pattern.matrix();
        table.add_row(vec![
            pattern.name.to_string(),
            matrix.lit_count().to_string(),
            format_grid(&matrix).trim_end().to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_encode(args: &EncodeArgs) -> Result<EncodeResult> {
    let source = resolve_source(&args.source)?;
    let span = info_span!("encode", source = %source.describe());
    let _guard = span.enter();

    let session = source.load_session()?;
    let matrix = session.source_matrix()?;
    let planes = encode(&matrix);
    let mut result = EncodeResult::new(source.describe(), session.mode(), planes, &matrix);

    if args.dry_run {
        info!("dry run, no files written");
        return Ok(result);
    }
    let paths = write_planes(&args.output_dir, session.mode(), &planes)
        .with_context(|| format!("write EPROM files to {}", args.output_dir.display()))?;
    result.columns_file = Some(paths.columns);
    result.rows_file = Some(paths.rows);
    Ok(result)
}

pub fn run_preview(args: &SourceArgs) -> Result<String> {
    let source = resolve_source(args)?;
    let session = source.load_session()?;
    Ok(session.preview()?)
}

pub fn run_import(args: &ImportArgs) -> Result<ImportResult> {
    let mode = EditMode::from(args.mode);
    let span = info_span!("import", file = %args.file.display(), %mode);
    let _guard = span.enter();

    let raw = read_import(&args.file)?;
    if mode == EditMode::Draw && raw.len() > PLANE_LEN {
        warn!(
            bytes = raw.len(),
            used = PLANE_LEN,
            "import is longer than one grid; trailing bytes ignored"
        );
    }
    let decoded = decode(&raw, mode)
        .with_context(|| format!("decode {} as {mode}", args.file.display()))?;
    info!(bytes = raw.len(), "imported");
    Ok(ImportResult {
        file: args.file.clone(),
        mode,
        raw,
        decoded,
    })
}

pub fn run_inspect(args: &InspectArgs) -> Result<InspectResult> {
    let span = info_span!("inspect");
    let _guard = span.enter();

    let planes = read_planes(&args.columns, &args.rows).with_context(|| {
        format!(
            "read plane pair {} / {}",
            args.columns.display(),
            args.rows.display()
        )
    })?;
    let matrix = reassemble(&planes);
    info!(lit = matrix.lit_count(), "reassembled grid");
    Ok(InspectResult {
        columns_file: args.columns.clone(),
        rows_file: args.rows.clone(),
        planes,
        matrix,
    })
}

fn resolve_source(args: &SourceArgs) -> Result<ImageSource> {
    args.source()
        .context("one of --text, --pattern or --grid is required")
}
