//! # Tree Transform
//!
//! Walks loaded YAML documents and rewrites the string scalars picked by a
//! [`SelectionPolicy`]. Mapping order, sequence order, tags and every
//! non-string scalar come through untouched.

pub mod operation;
pub mod selection;

use std::{fmt, num::NonZeroUsize};

use serde_yaml::Value;

use crate::{
    codec::{Dumper, Loader, YamlCodec},
    error::TransformError,
    wrapping::{MarkdownWrapper, ParagraphWrapper},
};

pub use operation::Operation;
pub use selection::{PathSegment, SelectionPolicy, format_path, key_label};

/// Line width used when none is given.
pub const DEFAULT_WIDTH: NonZeroUsize = match NonZeroUsize::new(70) {
    Some(width) => width,
    None => panic!("default width must be non-zero"),
};

pub type ScalarHook = Box<dyn Fn(&str) -> String + Send + Sync>;
pub type LintHook = Box<dyn Fn(&str) + Send + Sync>;

/// Everything one transform invocation needs. Built per call, never shared
/// mutably, so independent calls may run concurrently.
pub struct TransformConfig {
    pub operation: Operation,
    pub width: NonZeroUsize,
    pub selection: SelectionPolicy,
    /// Applied to each selected scalar before segmentation.
    pub pre_map: Option<ScalarHook>,
    /// Applied to each selected scalar after reassembly.
    pub post_map: Option<ScalarHook>,
    /// Called with each selected scalar once it is final.
    pub lint: Option<LintHook>,
    pub wrapper: Box<dyn ParagraphWrapper>,
    pub loader: Option<Box<dyn Loader>>,
    pub dumper: Option<Box<dyn Dumper>>,
}

impl TransformConfig {
    pub fn new(operation: Operation) -> Self {
        Self {
            operation,
            width: DEFAULT_WIDTH,
            selection: SelectionPolicy::All,
            pre_map: None,
            post_map: None,
            lint: None,
            wrapper: Box::new(MarkdownWrapper),
            loader: None,
            dumper: None,
        }
    }

    pub fn with_width(mut self, width: NonZeroUsize) -> Self {
        self.width = width;
        self
    }

    pub fn with_selection(mut self, selection: SelectionPolicy) -> Self {
        self.selection = selection;
        self
    }

    pub fn with_pre_map(mut self, f: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        self.pre_map = Some(Box::new(f));
        self
    }

    pub fn with_post_map(mut self, f: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        self.post_map = Some(Box::new(f));
        self
    }

    pub fn with_lint(mut self, f: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.lint = Some(Box::new(f));
        self
    }

    pub fn with_wrapper(mut self, wrapper: impl ParagraphWrapper + 'static) -> Self {
        self.wrapper = Box::new(wrapper);
        self
    }

    pub fn with_loader(mut self, loader: impl Loader + 'static) -> Self {
        self.loader = Some(Box::new(loader));
        self
    }

    pub fn with_dumper(mut self, dumper: impl Dumper + 'static) -> Self {
        self.dumper = Some(Box::new(dumper));
        self
    }

    fn loader(&self) -> &dyn Loader {
        self.loader.as_deref().unwrap_or(&YamlCodec)
    }

    fn dumper(&self) -> &dyn Dumper {
        self.dumper.as_deref().unwrap_or(&YamlCodec)
    }

    /// Runs the configured operation and hooks over one selected scalar.
    pub fn rewrite(&self, text: &str) -> String {
        let pre = match &self.pre_map {
            Some(f) => f(text),
            None => text.to_string(),
        };
        let out = self.operation.apply(&pre, self.width, self.wrapper.as_ref());
        let out = match &self.post_map {
            Some(f) => f(&out),
            None => out,
        };
        if let Some(lint) = &self.lint {
            lint(&out);
        }
        out
    }
}

impl fmt::Debug for TransformConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransformConfig")
            .field("operation", &self.operation)
            .field("width", &self.width)
            .field("selection", &self.selection)
            .field("pre_map", &self.pre_map.is_some())
            .field("post_map", &self.post_map.is_some())
            .field("lint", &self.lint.is_some())
            .field("loader", &self.loader.is_some())
            .field("dumper", &self.dumper.is_some())
            .finish_non_exhaustive()
    }
}

/// Transforms one document tree.
pub fn transform_value(root: Value, config: &TransformConfig) -> Result<Value, TransformError> {
    config.selection.validate(std::slice::from_ref(&root))?;
    Ok(transform_document(root, config))
}

/// Loads `serialized`, transforms every document and dumps the result.
pub fn transform(serialized: &str, config: &TransformConfig) -> Result<String, TransformError> {
    let documents = config
        .loader()
        .load(serialized)
        .map_err(TransformError::DocumentParse)?;
    config.selection.validate(&documents)?;

    let documents: Vec<Value> = documents
        .into_iter()
        .map(|d| transform_document(d, config))
        .collect();

    config
        .dumper()
        .dump(&documents)
        .map_err(TransformError::DocumentDump)
}

/// Like [`transform`], but `None` when the output is identical to the input.
pub fn transform_if_changed(
    serialized: &str,
    config: &TransformConfig,
) -> Result<Option<String>, TransformError> {
    let cooked = transform(serialized, config)?;
    Ok((cooked != serialized).then_some(cooked))
}

fn transform_document(mut root: Value, config: &TransformConfig) -> Value {
    let mut path = Vec::new();
    descend(&mut root, None, &mut path, config);
    root
}

fn descend(
    value: &mut Value,
    key: Option<&str>,
    path: &mut Vec<PathSegment>,
    config: &TransformConfig,
) {
    match value {
        Value::String(text) => {
            if !config.selection.selects(path, key, text) {
                return;
            }
            let new = config.rewrite(text);
            if new != *text {
                log::debug!(
                    "{} {}: {} -> {} lines",
                    config.operation,
                    format_path(path),
                    text.lines().count(),
                    new.lines().count()
                );
                *text = new;
            }
        }
        Value::Sequence(items) => {
            for (i, item) in items.iter_mut().enumerate() {
                path.push(PathSegment::Index(i));
                descend(item, None, path, config);
                path.pop();
            }
        }
        Value::Mapping(map) => {
            for (k, v) in map.iter_mut() {
                let label = key_label(k);
                path.push(PathSegment::Key(label.clone()));
                descend(v, Some(&label), path, config);
                path.pop();
            }
        }
        Value::Tagged(tagged) => descend(&mut tagged.value, key, path, config),
        Value::Null | Value::Bool(_) | Value::Number(_) => {}
    }
}
