use crate::ast;
use crate::file_reader;
use crate::operation::FragmentIndex;
use crate::operation::FragmentIndexError;
use crate::operation::OperationArtifact;
use crate::operation::OperationEvaluationError;
use crate::operation::OperationEvaluator;
use crate::schema::Schema;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

type Result<T> = std::result::Result<T, DocumentEvaluationError>;

/// Loads executable documents and narrows every operation they define.
///
/// ```
/// use libgqlnarrow::operation::DocumentEvaluator;
/// use libgqlnarrow::schema::SchemaBuilder;
///
/// let schema = SchemaBuilder::from_str("
///     type Query { greeting(name: String): String }
/// ").unwrap().build().unwrap();
///
/// let artifacts = DocumentEvaluator::new(&schema).evaluate_str(
///     None,
///     "query Greet($name: String) { greeting(name: $name) }",
/// ).unwrap();
///
/// assert_eq!(artifacts.len(), 1);
/// assert_eq!(artifacts[0].name(), "Greet");
/// assert_eq!(artifacts[0].variable_uses().len(), 1);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct DocumentEvaluator<'schema> {
    schema: &'schema Schema,
}
impl<'schema> DocumentEvaluator<'schema> {
    pub fn new(schema: &'schema Schema) -> Self {
        Self { schema }
    }

    /// Narrow every operation of an already-parsed document.
    ///
    /// Operations are evaluated independently: one failing operation does
    /// not stop the others from being evaluated, but if any fails only the
    /// errors are returned.
    pub fn evaluate_ast(
        &self,
        document: &ast::operation::Document,
        file_path: Option<&Path>,
    ) -> Result<Vec<OperationArtifact>> {
        let fragments = FragmentIndex::from_ast(document, file_path)
            .map_err(DocumentLoadError::from)?;
        let evaluator = OperationEvaluator::new(self.schema, &fragments);

        let mut artifacts = vec![];
        let mut errors = vec![];
        for def in &document.definitions {
            let ast::operation::Definition::Operation(op_def) = def else {
                continue;
            };
            match evaluator.evaluate(op_def) {
                Ok(artifact) => artifacts.push(artifact),
                Err(err) => errors.push(err),
            }
        }

        if !errors.is_empty() {
            return Err(DocumentEvaluationError::OperationErrors(errors));
        }
        log::debug!(
            "evaluated {} operation(s) using {} fragment definition(s)",
            artifacts.len(),
            fragments.len(),
        );
        Ok(artifacts)
    }

    pub fn evaluate_file(&self, file_path: impl AsRef<Path>) -> Result<Vec<OperationArtifact>> {
        let file_path = file_path.as_ref();
        let content = file_reader::read_content(file_path)
            .map_err(|err| DocumentLoadError::DocumentFileReadError(Box::new(err)))?;
        self.evaluate_str(Some(file_path.to_path_buf()), content.as_str())
    }

    pub fn evaluate_str(
        &self,
        file_path: Option<PathBuf>,
        content: &str,
    ) -> Result<Vec<OperationArtifact>> {
        let document = ast::operation::parse(content)
            .map_err(|err| DocumentLoadError::ParseError {
                file: file_path.to_owned(),
                err: err.to_string(),
            })?;
        self.evaluate_ast(&document, file_path.as_deref())
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum DocumentEvaluationError {
    #[error(transparent)]
    LoadError(#[from] DocumentLoadError),

    #[error(
        "{} operation(s) failed to evaluate:\n{}",
        .0.len(),
        .0.iter().map(|err| format!("  {err}")).collect::<Vec<_>>().join("\n"),
    )]
    OperationErrors(Vec<OperationEvaluationError>),
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum DocumentLoadError {
    #[error("Failure while trying to read an executable document from disk: {0}")]
    DocumentFileReadError(Box<file_reader::ReadContentError>),

    #[error(transparent)]
    FragmentIndexError(#[from] FragmentIndexError),

    #[error("Error parsing executable document: {err}")]
    ParseError {
        file: Option<PathBuf>,
        err: String,
    },
}
