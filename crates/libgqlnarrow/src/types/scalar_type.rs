use crate::types::ScalarKind;
use crate::types::TypeHeader;

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ScalarType {
    pub(crate) header: TypeHeader,
    pub(crate) kind: ScalarKind,
}
impl ScalarType {
    pub(crate) fn builtin(kind: ScalarKind) -> Self {
        Self {
            header: TypeHeader::builtin(kind.name()),
            kind,
        }
    }

    pub(crate) fn custom(header: TypeHeader) -> Self {
        Self {
            kind: ScalarKind::Custom(header.name.to_owned()),
            header,
        }
    }

    pub fn header(&self) -> &TypeHeader {
        &self.header
    }

    pub fn is_builtin(&self) -> bool {
        !matches!(self.kind, ScalarKind::Custom(_))
    }

    pub fn kind(&self) -> &ScalarKind {
        &self.kind
    }

    pub fn name(&self) -> &str {
        self.header.name()
    }
}
