// System instructions and shared document fragments for the prompt
// strategies. One persona per deployment mode, constant across requests.

/// System persona for the minimal free-context strategy.
pub const MINIMAL_SYSTEM: &str = "Eres un experto en creatividad disruptiva para marketing. \
    Cada idea debe ser única, innovadora y factible de implementar. \
    NO repitas conceptos entre las diferentes propuestas.";

/// System persona for the context-aware strategy.
pub const CONTEXT_AWARE_SYSTEM: &str = "Eres un experto en creatividad disruptiva. \
    Cada idea debe ser única, innovadora y factible de implementar, y debe estar \
    alineada con el objetivo, el público objetivo, las restricciones y el presupuesto \
    declarados en la solicitud. Indica en cada propuesta cómo se cumple esa alineación. \
    NO repitas conceptos entre las diferentes propuestas.";

/// System persona for the avoidance strategy — the original service's
/// instruction, kept verbatim in meaning: everything generated must be
/// completely different from the supplied context.
pub const AVOIDANCE_SYSTEM: &str = "Eres un experto en creatividad disruptiva. \
    Para cada aspecto solicitado, debes generar ideas COMPLETAMENTE DIFERENTES \
    a las mencionadas en el contexto. Cada idea debe ser única, innovadora y \
    factible de implementar. NO repitas conceptos entre las diferentes propuestas.";

/// Header line preceding the numbered sections, per strategy.
pub const MINIMAL_TASK_LINE: &str =
    "Por favor, genera propuestas disruptivas para CADA UNO de los siguientes aspectos:";
pub const CONTEXT_AWARE_TASK_LINE: &str = "Por favor, genera ideas DISRUPTIVAS para CADA UNO \
    de los siguientes aspectos, alineadas con la estrategia declarada:";
pub const AVOIDANCE_TASK_LINE: &str =
    "Por favor, genera ideas DISRUPTIVAS y DIFERENTES para CADA UNO de los siguientes aspectos:";

/// Extra document-level instruction for the avoidance strategy.
pub const AVOIDANCE_OPPOSITES_LINE: &str = "IMPORTANTE: Las propuestas deben ser lo OPUESTO \
    a lo planteado en cada contexto actual.";

/// Heading of the prior-artifact block. Present only when the caller
/// supplies previously generated ideas.
pub const AVOID_SIMILARITY_HEADING: &str = "IDEAS PREVIAMENTE GENERADAS (EVITAR SIMILITUD):";

/// Instruction closing the prior-artifact block.
pub const AVOID_SIMILARITY_INSTRUCTION: &str = "INSTRUCCIÓN: Las nuevas ideas NO deben \
    parecerse a las ideas previas listadas arriba.";

/// Title of the strategic-alignment block (context-aware strategy only).
pub const ALIGNMENT_HEADING: &str = "ALINEACIÓN ESTRATÉGICA:";

/// Cross-reference instruction rendered after the alignment block.
pub const ALIGNMENT_INSTRUCTION: &str = "Cada propuesta debe indicar cómo se alinea con el \
    objetivo, el público objetivo, las restricciones y el presupuesto declarados.";
