//! Prompt strategies — one `compose` implementation per deployment mode.
//!
//! `compose` is a pure, total function of (area context, prior artifacts):
//! it never fails for a known area, never truncates a field value, and the
//! same inputs always yield a byte-identical document. The three strategies
//! are mutually exclusive; exactly one is constructed at startup from
//! `PromptMode` (`AppState` carries it as `Arc<dyn PromptStrategy>`).

use std::fmt::Write;
use std::sync::Arc;

use crate::config::PromptMode;
use crate::generation::areas::AreaContext;
use crate::generation::prompts::{
    ALIGNMENT_HEADING, ALIGNMENT_INSTRUCTION, AVOIDANCE_OPPOSITES_LINE, AVOIDANCE_SYSTEM,
    AVOIDANCE_TASK_LINE, AVOID_SIMILARITY_HEADING, AVOID_SIMILARITY_INSTRUCTION,
    CONTEXT_AWARE_SYSTEM, CONTEXT_AWARE_TASK_LINE, MINIMAL_SYSTEM, MINIMAL_TASK_LINE,
};
use crate::generation::schema::{area_schema, Section, NOT_SPECIFIED};

/// A prompt strategy: fixed system persona plus the document composer.
pub trait PromptStrategy: Send + Sync {
    /// The system-level instruction attached to every call in this
    /// deployment. Constant across requests within a mode.
    fn system_instruction(&self) -> &'static str;

    /// Builds the instruction document for one request.
    fn compose(&self, context: &AreaContext, prior: &[String]) -> String;
}

/// Constructs the single strategy this deployment runs.
pub fn strategy_for(mode: PromptMode) -> Arc<dyn PromptStrategy> {
    match mode {
        PromptMode::Minimal => Arc::new(MinimalStrategy),
        PromptMode::ContextAware => Arc::new(ContextAwareStrategy),
        PromptMode::Avoidance => Arc::new(AvoidanceStrategy),
    }
}

/// Free-context proposals per sub-topic, no constraints. Missing fields
/// render as the raw empty string.
pub struct MinimalStrategy;

impl PromptStrategy for MinimalStrategy {
    fn system_instruction(&self) -> &'static str {
        MINIMAL_SYSTEM
    }

    fn compose(&self, context: &AreaContext, prior: &[String]) -> String {
        render(
            context,
            prior,
            &RenderOptions {
                task_line: MINIMAL_TASK_LINE,
                context_label: "Contexto:",
                missing_marker: None,
                alignment: false,
                opposites_line: None,
                context_aware_counts: false,
            },
        )
    }
}

/// Adds the strategic-alignment block and asks the model to cross-reference
/// every proposal against it. Missing fields render as `No especificado`.
pub struct ContextAwareStrategy;

impl PromptStrategy for ContextAwareStrategy {
    fn system_instruction(&self) -> &'static str {
        CONTEXT_AWARE_SYSTEM
    }

    fn compose(&self, context: &AreaContext, prior: &[String]) -> String {
        render(
            context,
            prior,
            &RenderOptions {
                task_line: CONTEXT_AWARE_TASK_LINE,
                context_label: "Contexto actual:",
                missing_marker: Some(NOT_SPECIFIED),
                alignment: true,
                opposites_line: None,
                context_aware_counts: true,
            },
        )
    }
}

/// Echoes each field's current/conventional value and instructs the model
/// to produce its opposite. This is the original service's behavior.
pub struct AvoidanceStrategy;

impl PromptStrategy for AvoidanceStrategy {
    fn system_instruction(&self) -> &'static str {
        AVOIDANCE_SYSTEM
    }

    fn compose(&self, context: &AreaContext, prior: &[String]) -> String {
        render(
            context,
            prior,
            &RenderOptions {
                task_line: AVOIDANCE_TASK_LINE,
                context_label: "Contexto actual:",
                missing_marker: None,
                alignment: false,
                opposites_line: Some(AVOIDANCE_OPPOSITES_LINE),
                context_aware_counts: false,
            },
        )
    }
}

struct RenderOptions {
    task_line: &'static str,
    context_label: &'static str,
    /// `Some` substitutes the marker for empty fields; `None` keeps the raw
    /// empty string. The two conventions must not be mixed across modes.
    missing_marker: Option<&'static str>,
    alignment: bool,
    opposites_line: Option<&'static str>,
    context_aware_counts: bool,
}

fn render(context: &AreaContext, prior: &[String], opts: &RenderOptions) -> String {
    let schema = area_schema(context.area());
    let mut doc = String::new();

    for h in schema.header {
        let value = placeholder(context.field(h.field), opts.missing_marker);
        let _ = writeln!(doc, "{}: {}", h.label, value);
    }
    doc.push('\n');

    if opts.alignment {
        let a = context.alineacion();
        doc.push_str(ALIGNMENT_HEADING);
        doc.push('\n');
        let _ = writeln!(doc, "- Marca: {}", placeholder(&a.marca, opts.missing_marker));
        let _ = writeln!(
            doc,
            "- Objetivo de campaña: {}",
            placeholder(&a.objetivo, opts.missing_marker)
        );
        let _ = writeln!(
            doc,
            "- Público objetivo: {}",
            placeholder(&a.target, opts.missing_marker)
        );
        let _ = writeln!(
            doc,
            "- Restricciones: {}",
            placeholder(&a.restricciones, opts.missing_marker)
        );
        let _ = writeln!(
            doc,
            "- Presupuesto y KPIs: {}",
            placeholder(&a.presupuesto, opts.missing_marker)
        );
        doc.push('\n');
        doc.push_str(ALIGNMENT_INSTRUCTION);
        doc.push_str("\n\n");
    }

    doc.push_str(opts.task_line);
    doc.push_str("\n\n");

    if let Some(line) = opts.opposites_line {
        doc.push_str(line);
        doc.push_str("\n\n");
    }

    for (i, section) in schema.sections.iter().enumerate() {
        render_section(&mut doc, context, section, i + 1, opts);
    }

    if !prior.is_empty() {
        doc.push_str(AVOID_SIMILARITY_HEADING);
        doc.push('\n');
        for (i, artifact) in prior.iter().enumerate() {
            let _ = writeln!(doc, "IDEA PREVIA {}:", i + 1);
            doc.push_str(artifact);
            doc.push_str("\n\n");
        }
        doc.push_str(AVOID_SIMILARITY_INSTRUCTION);
        doc.push('\n');
    }

    doc
}

fn render_section(
    doc: &mut String,
    context: &AreaContext,
    section: &Section,
    number: usize,
    opts: &RenderOptions,
) {
    let count = if opts.context_aware_counts {
        section.count_context_aware
    } else {
        section.count
    };

    let _ = writeln!(doc, "{}. {}:", number, section.title);

    if let Some(field) = section.context_field {
        let value = placeholder(context.field(field), opts.missing_marker);
        let _ = writeln!(doc, "{} {}", opts.context_label, value);
    }

    let _ = writeln!(doc, "{} {} {}:", section.verb, count, section.noun);

    let _ = writeln!(doc, "{} 1:", section.item_heading);
    for label in section.labels {
        let _ = writeln!(doc, "- {label}:");
    }
    doc.push('\n');

    let range = if count == 3 {
        "2 y 3".to_string()
    } else {
        format!("2 a {count}")
    };
    let _ = writeln!(
        doc,
        "[Continuar con mismo formato para {} {}]",
        section.item_plural, range
    );
    doc.push('\n');
}

fn placeholder<'a>(value: &'a str, marker: Option<&'static str>) -> &'a str {
    match marker {
        Some(m) if value.is_empty() => m,
        _ => value,
    }
}
