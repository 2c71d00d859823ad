use crate::CommandOutcome;
use crate::RunnableCommand;
use crate::file_discovery;
use crate::output_utils;
use anyhow::Context;
use libgqlnarrow::operation::DocumentEvaluator;
use libgqlnarrow::operation::OperationArtifact;
use libgqlnarrow::operation::ProxyType;
use libgqlnarrow::schema::Schema;
use libgqlnarrow::schema::SchemaBuilder;
use std::collections::HashSet;
use std::fmt::Write;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, clap::Args)]
pub(crate) struct NarrowCmd {
    /// File extensions to pick up when a path names a directory.
    #[arg(
        default_values_t = ["graphql".to_string(), "graphqls".to_string()],
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    /// Schema files, or directories to search for them.
    #[arg(long, required = true, short = 's')]
    schema: Vec<PathBuf>,

    /// List every proxy type with its fields (or union branches).
    #[arg(long)]
    show_proxies: bool,

    /// Executable documents, or directories to search for them.
    #[arg(name = "DOCUMENT_PATHS", required = true)]
    document_paths: Vec<PathBuf>,
}
impl NarrowCmd {
    fn load_schema(&self, exts: &HashSet<String>) -> anyhow::Result<Schema> {
        let schema_files = file_discovery::find_graphql_files(&self.schema, exts)?;
        log::debug!("Loading the schema from {} file(s).", schema_files.len());

        let schema = SchemaBuilder::from_files(schema_files)
            .and_then(SchemaBuilder::build)
            .context("Failed to build the schema")?;
        log::info!("Loaded a schema with {} types.", schema.all_types().len());
        Ok(schema)
    }
}

#[inherent::inherent]
impl RunnableCommand for NarrowCmd {
    pub async fn run(self, verbose: bool) -> CommandOutcome {
        let exts = file_discovery::normalize_exts(&self.graphql_file_exts);
        let schema = match self.load_schema(&exts) {
            Ok(schema) => Arc::new(schema),
            Err(err) => return failed(format_args!("{err:#}")),
        };
        let document_files = match file_discovery::find_graphql_files(&self.document_paths, &exts) {
            Ok(files) => files,
            Err(err) => return failed(format_args!("{err:#}")),
        };
        log::debug!("Narrowing {} executable document(s).", document_files.len());

        // Documents are independent; narrow them on the blocking pool and
        // collect results in discovery order.
        let tasks: Vec<_> = document_files
            .iter()
            .cloned()
            .map(|file_path| {
                let schema = Arc::clone(&schema);
                tokio::task::spawn_blocking(move || {
                    DocumentEvaluator::new(&schema).evaluate_file(file_path)
                })
            })
            .collect();

        let mut summary = String::new();
        let mut errors: Vec<String> = vec![];
        let mut num_operations = 0;
        for (file_path, task) in document_files.iter().zip(tasks) {
            match task.await {
                Ok(Ok(artifacts)) => {
                    num_operations += artifacts.len();
                    for artifact in &artifacts {
                        let described =
                            describe_artifact(&mut summary, artifact, self.show_proxies, verbose);
                        if let Err(err) = described {
                            return failed(format_args!(
                                "Failed to describe operation `{}`: {err}",
                                artifact.name(),
                            ));
                        }
                    }
                },
                Ok(Err(err)) => errors.push(format!("{}: {err}", file_path.display())),
                Err(join_err) => errors.push(format!(
                    "{}: narrowing task did not finish: {join_err}",
                    file_path.display(),
                )),
            }
        }

        if !errors.is_empty() {
            return failed(format_args!(
                "{} of {} document(s) failed to narrow:\n{}",
                errors.len(),
                document_files.len(),
                errors.join("\n"),
            ));
        }

        CommandOutcome::Succeeded(format!(
            "{} Narrowed {num_operations} operation(s) from {} document(s):\n{summary}",
            output_utils::GREEN_CHECK,
            document_files.len(),
        ))
    }
}

fn failed(message: std::fmt::Arguments<'_>) -> CommandOutcome {
    CommandOutcome::Failed(format!("{} {message}", output_utils::RED_X))
}

fn describe_artifact(
    out: &mut String,
    artifact: &OperationArtifact,
    show_proxies: bool,
    show_stats: bool,
) -> std::fmt::Result {
    writeln!(
        out,
        "  * {} `{}` ({}): root field `{}`, {} proxy type(s), {} variable(s), \
        {} variable use(s), {} fragment(s)",
        artifact.kind(),
        artifact.name(),
        artifact.def_location(),
        artifact.root_field().response_key(),
        artifact.proxies().len(),
        artifact.variables().len(),
        artifact.variable_uses().len(),
        artifact.fragments().len(),
    )?;
    if show_stats {
        let stats = artifact.stats();
        writeln!(
            out,
            "      fragment resolutions: {}, fragment cache hits: {}",
            stats.fragment_resolutions,
            stats.fragment_cache_hits,
        )?;
    }
    if !show_proxies {
        return Ok(());
    }

    for proxy in artifact.proxies().iter() {
        let members: Vec<&str> = match proxy {
            ProxyType::Union(union_proxy) =>
                union_proxy.branches().keys().map(String::as_str).collect(),
            ProxyType::Interface(_) | ProxyType::Object(_) => proxy
                .fields()
                .map(|fields| fields.keys().map(String::as_str).collect())
                .unwrap_or_default(),
        };
        writeln!(out, "      - {} {{ {} }}", proxy.name(), members.join(", "))?;
    }
    Ok(())
}
