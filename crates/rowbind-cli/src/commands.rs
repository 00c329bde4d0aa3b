use std::fs;

use anyhow::{Context, Result};
use serde_json::{Map, Value};
use tracing::{info, info_span, warn};

use rowbind_core::{BindOptions, Binder, DuplicateKeys, TimestampFormats};
use rowbind_ingest::CsvRowSource;
use rowbind_model::{DynRecord, FieldKind, FieldValue, RecordSchema};

use crate::binding::BindingFile;
use crate::cli::{BindArgs, DuplicatesArg};

/// Layout used for timestamps in JSON output.
const ISO_DATETIME: &str = "%Y-%m-%dT%H:%M:%S";

pub fn run_bind(args: &BindArgs) -> Result<()> {
    let span = info_span!("bind", input = %args.input.display());
    let _guard = span.enter();

    let binding = BindingFile::load(&args.binding)?;
    let schema = binding.schema()?;
    let mapping = binding.mapping();

    let options = BindOptions {
        strict: args.strict,
        duplicate_keys: duplicate_policy(args.duplicates),
        formats: TimestampFormats::default(),
    };
    let mut rows = CsvRowSource::open(&args.input)
        .with_context(|| format!("open input: {}", args.input.display()))?;
    let mut records: Vec<DynRecord> = Vec::new();
    let report =
        Binder::with_options(options).bind_dyn(&mut rows, &mapping, &schema, &mut records)?;

    for warning in &report.warnings {
        warn!("{warning}");
    }
    info!(
        records = report.records,
        warnings = report.warning_count(),
        "bind complete"
    );

    let rendered = render_records(&schema, &records, args.pretty)?;
    match &args.output {
        Some(path) => fs::write(path, rendered)
            .with_context(|| format!("write output: {}", path.display()))?,
        None => println!("{rendered}"),
    }
    Ok(())
}

pub fn run_kinds() {
    for kind in FieldKind::all() {
        println!("{kind}");
    }
}

fn duplicate_policy(arg: DuplicatesArg) -> DuplicateKeys {
    match arg {
        DuplicatesArg::First => DuplicateKeys::FirstWins,
        DuplicatesArg::Last => DuplicateKeys::LastWins,
        DuplicatesArg::Reject => DuplicateKeys::Reject,
    }
}

/// Render bound records as JSON objects keyed by field key.
fn render_records(schema: &RecordSchema, records: &[DynRecord], pretty: bool) -> Result<String> {
    let mut out = Vec::with_capacity(records.len());
    for record in records {
        let mut object = Map::new();
        for (field, value) in schema.fields().iter().zip(record.values()) {
            object.insert(field.key.clone(), render_value(value));
        }
        out.push(Value::Object(object));
    }
    let rendered = if pretty {
        serde_json::to_string_pretty(&out)?
    } else {
        serde_json::to_string(&out)?
    };
    Ok(rendered)
}

fn render_value(value: &FieldValue) -> Value {
    match value {
        FieldValue::Text(v) => Value::String(v.clone()),
        FieldValue::Int(v) => Value::from(*v),
        FieldValue::UInt(v) => Value::from(*v),
        FieldValue::Float(v) => serde_json::Number::from_f64(*v).map_or(Value::Null, Value::Number),
        FieldValue::Bool(v) => Value::Bool(*v),
        FieldValue::Timestamp(v) => Value::String(v.format(ISO_DATETIME).to_string()),
    }
}
