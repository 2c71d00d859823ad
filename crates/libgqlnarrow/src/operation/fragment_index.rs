use crate::ast;
use crate::loc;
use indexmap::IndexMap;
use std::path::Path;
use thiserror::Error;

/// Named fragment definitions of one executable document, indexed by name.
///
/// Fragments are scoped to the document that defines them: a spread can only
/// refer to a fragment defined in the same document.
#[derive(Clone, Debug)]
pub struct FragmentIndex<'doc> {
    file_path: Option<&'doc Path>,
    fragments: IndexMap<&'doc str, &'doc ast::operation::FragmentDefinition>,
}
impl<'doc> FragmentIndex<'doc> {
    pub fn from_ast(
        document: &'doc ast::operation::Document,
        file_path: Option<&'doc Path>,
    ) -> Result<Self, FragmentIndexError> {
        let mut fragments: IndexMap<&'doc str, &'doc ast::operation::FragmentDefinition> =
            IndexMap::new();

        for def in &document.definitions {
            let ast::operation::Definition::Fragment(frag_def) = def else {
                continue;
            };
            if let Some(existing) = fragments.get(frag_def.name.as_str()) {
                return Err(FragmentIndexError::DuplicateFragmentDefinition {
                    fragment_name: frag_def.name.to_owned(),
                    location1: loc::SourceLocation::from_execdoc_ast_position(
                        file_path,
                        &existing.position,
                    ),
                    location2: loc::SourceLocation::from_execdoc_ast_position(
                        file_path,
                        &frag_def.position,
                    ),
                });
            }
            fragments.insert(frag_def.name.as_str(), frag_def);
        }

        Ok(Self {
            file_path,
            fragments,
        })
    }

    pub fn file_path(&self) -> Option<&'doc Path> {
        self.file_path
    }

    pub fn get(&self, fragment_name: &str) -> Option<&'doc ast::operation::FragmentDefinition> {
        self.fragments.get(fragment_name).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn names(&self) -> impl Iterator<Item = &'doc str> + '_ {
        self.fragments.keys().copied()
    }

    /// The name of the type in a fragment's `on Type` condition.
    pub fn type_condition(&self, fragment_name: &str) -> Option<&'doc str> {
        self.get(fragment_name).map(|frag_def| {
            let ast::operation::TypeCondition::On(type_name) = &frag_def.type_condition;
            type_name.as_str()
        })
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum FragmentIndexError {
    #[error("Multiple fragments named `{fragment_name}` were defined ({location1} and {location2})")]
    DuplicateFragmentDefinition {
        fragment_name: String,
        location1: loc::SourceLocation,
        location2: loc::SourceLocation,
    },
}
