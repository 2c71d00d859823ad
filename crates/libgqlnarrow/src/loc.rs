use crate::ast;
use std::path::Path;
use std::path::PathBuf;

/// Very similar to graphql_parser's [Pos](graphql_parser::Pos), except it
/// includes an (optional) path to the file the position refers to.
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct FilePosition {
    pub col: usize,
    pub file: Option<PathBuf>,
    pub line: usize,
}
impl FilePosition {
    pub(crate) fn from_pos(file: Option<&Path>, pos: &ast::AstPos) -> Self {
        Self {
            col: pos.column,
            file: file.map(|f| f.to_path_buf()),
            line: pos.line,
        }
    }
}
impl std::fmt::Display for FilePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.file {
            Some(file) => write!(f, "{}:{}:{}", file.display(), self.line, self.col),
            None => write!(f, "<str>:{}:{}", self.line, self.col),
        }
    }
}

/// Where something was defined: in an executable document, in the schema, or
/// implicitly by GraphQL itself (e.g. `String` or `__typename`).
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum SourceLocation {
    ExecutableDocument(FilePosition),
    GraphQLBuiltIn,
    Schema(FilePosition),
}
impl SourceLocation {
    pub(crate) fn from_execdoc_ast_position(
        file: Option<&Path>,
        pos: &ast::AstPos,
    ) -> Self {
        Self::ExecutableDocument(FilePosition::from_pos(file, pos))
    }

    pub(crate) fn from_schema_ast_position(
        file: Option<&Path>,
        pos: &ast::AstPos,
    ) -> Self {
        Self::Schema(FilePosition::from_pos(file, pos))
    }

    /// Produce a [`SourceLocation`] in the same file (and of the same kind) as
    /// this one, but pointing at a different AST position.
    pub(crate) fn with_ast_position(&self, pos: &ast::AstPos) -> Self {
        match self {
            Self::ExecutableDocument(file_pos) => Self::ExecutableDocument(
                FilePosition::from_pos(file_pos.file.as_deref(), pos),
            ),
            Self::GraphQLBuiltIn => Self::GraphQLBuiltIn,
            Self::Schema(file_pos) => Self::Schema(
                FilePosition::from_pos(file_pos.file.as_deref(), pos),
            ),
        }
    }

    pub fn file_position(&self) -> Option<&FilePosition> {
        match self {
            Self::ExecutableDocument(file_pos)
                | Self::Schema(file_pos) => Some(file_pos),
            Self::GraphQLBuiltIn => None,
        }
    }
}
impl std::fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ExecutableDocument(file_pos)
                | Self::Schema(file_pos) => write!(f, "{file_pos}"),
            Self::GraphQLBuiltIn => write!(f, "<graphql built-in>"),
        }
    }
}
