use clap::Args;
use divorce_intake::error::AppError;
use divorce_intake::workflows::bulk_scan::{
    read_csv_fields, read_json_fields, transform::stages_for, FormType, OcrDataField,
    PipelineRegistry, TransformationRequest,
};
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Args, Debug)]
pub(crate) struct TransformArgs {
    /// Paper form type, for example D8 or D8S
    #[arg(long)]
    pub(crate) form_type: String,
    /// Identifier of the scanned envelope the fields came from
    #[arg(long)]
    pub(crate) source_record_id: String,
    /// OCR fields as a `name,value` CSV or a JSON array of `{name, value}`
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Pretty-print the output map
    #[arg(long)]
    pub(crate) pretty: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct FormsArgs {
    /// Include the ordered section stages for each form
    #[arg(long)]
    pub(crate) stages: bool,
}

#[derive(Debug, Serialize)]
struct FormSummary {
    form_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    stages: Option<Vec<&'static str>>,
}

pub(crate) fn transform_file(
    args: &TransformArgs,
    registry: &PipelineRegistry,
) -> Result<String, AppError> {
    let fields = load_fields(&args.input)?;
    debug!(path = %args.input.display(), fields = fields.len(), "loaded OCR fields");

    let request = TransformationRequest::new(
        args.form_type.clone(),
        args.source_record_id.clone(),
        fields,
    );
    let output = registry.transform(&request)?;

    let rendered = if args.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    Ok(rendered)
}

pub(crate) fn list_forms(
    args: &FormsArgs,
    registry: &PipelineRegistry,
) -> Result<String, AppError> {
    let summaries: Vec<FormSummary> = registry
        .form_types()
        .into_iter()
        .map(|form_type| FormSummary {
            form_type: form_type.as_str().to_string(),
            stages: args.stages.then(|| stage_names(form_type)),
        })
        .collect();
    Ok(serde_json::to_string_pretty(&summaries)?)
}

fn stage_names(form_type: FormType) -> Vec<&'static str> {
    stages_for(form_type.definition().prayer)
        .iter()
        .map(|stage| stage.name)
        .collect()
}

/// Picks the reader from the file extension.
fn load_fields(path: &Path) -> Result<Vec<OcrDataField>, AppError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("csv") => Ok(read_csv_fields(BufReader::new(File::open(path)?))?),
        Some("json") => Ok(read_json_fields(BufReader::new(File::open(path)?))?),
        _ => Err(AppError::Io(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!(
                "unsupported input '{}': expected a .csv or .json file",
                path.display()
            ),
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use divorce_intake::config::IntakeConfig;
    use divorce_intake::workflows::bulk_scan::{
        RequiredFieldsValidator, TransformationError, WarningIdStrategy,
    };
    use serde_json::Value;
    use std::io::Write;
    use std::sync::Arc;

    const NAMES_CSV: &str = "name,value
applicationForDivorce,true
aSoleApplication,true
soleOrApplicant1FirstName,Ann
soleOrApplicant1LastName,Smith
respondentOrApplicant2FirstName,Bob
respondentOrApplicant2LastName,Smith
";

    fn registry() -> PipelineRegistry {
        let config = IntakeConfig {
            warning_ids: WarningIdStrategy::Sequential,
            ..IntakeConfig::default()
        };
        PipelineRegistry::from_config(&config, Arc::new(RequiredFieldsValidator))
    }

    fn input_file(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(suffix)
            .tempfile()
            .expect("temp file");
        file.write_all(contents.as_bytes()).expect("write input");
        file
    }

    fn args(form_type: &str, input: &Path) -> TransformArgs {
        TransformArgs {
            form_type: form_type.to_string(),
            source_record_id: "1616591401473378".to_string(),
            input: input.to_path_buf(),
            pretty: false,
        }
    }

    #[test]
    fn csv_input_is_transformed() {
        let file = input_file(".csv", NAMES_CSV);
        let rendered = transform_file(&args("D8", file.path()), &registry()).expect("transforms");

        let output: Value = serde_json::from_str(&rendered).expect("json output");
        assert_eq!(output["bulkScanCaseReference"], "1616591401473378");
        assert_eq!(output["applicant1FirstName"], "Ann");
        assert_eq!(output["transformationAndOcrWarnings"][0]["id"], "1");
    }

    #[test]
    fn json_input_is_transformed() {
        let file = input_file(
            ".JSON",
            r#"[{"name":"soleOrApplicant1FirstName","value":"Ann"},
                {"name":"soleOrApplicant1LastName","value":"Smith"},
                {"name":"respondentOrApplicant2FirstName","value":"Bob"},
                {"name":"respondentOrApplicant2LastName","value":"Smith"}]"#,
        );
        let rendered =
            transform_file(&args("D8S", file.path()), &registry()).expect("transforms");

        let output: Value = serde_json::from_str(&rendered).expect("json output");
        assert_eq!(output["supplementaryCaseType"], "judicialSeparation");
    }

    #[test]
    fn unsupported_form_type_surfaces_transformation_error() {
        let file = input_file(".csv", NAMES_CSV);
        let err = transform_file(&args("D9", file.path()), &registry()).expect_err("rejected");

        assert_eq!(err.exit_code(), 2);
        assert!(matches!(
            err,
            AppError::Transformation(TransformationError::UnsupportedFormType(ref form)) if form == "D9"
        ));
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let file = input_file(".txt", NAMES_CSV);
        let err = transform_file(&args("D8", file.path()), &registry()).expect_err("rejected");

        assert_eq!(err.exit_code(), 1);
        assert!(matches!(err, AppError::Io(_)));
    }

    #[test]
    fn forms_listing_includes_stage_order_on_request() {
        let rendered =
            list_forms(&FormsArgs { stages: true }, &registry()).expect("lists forms");
        let listing: Value = serde_json::from_str(&rendered).expect("json output");

        assert_eq!(listing[0]["form_type"], "D8");
        assert_eq!(listing[1]["form_type"], "D8S");
        assert_eq!(listing[1]["stages"][5], "d8s_prayer");

        let rendered = list_forms(&FormsArgs::default(), &registry()).expect("lists forms");
        let listing: Value = serde_json::from_str(&rendered).expect("json output");
        assert!(listing[0].get("stages").is_none());
    }
}
