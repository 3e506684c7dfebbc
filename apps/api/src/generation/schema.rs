#![allow(dead_code)]

//! Area Schema Registry — per-area recognized fields and the section
//! skeleton of the instruction document.
//!
//! The composer renders whatever the registry declares; changing a template
//! means changing a table here, not editing string-assembly code.

use crate::config::PromptMode;
use crate::generation::areas::Area;

/// One labeled sub-topic of an area's instruction document.
#[derive(Debug)]
pub struct Section {
    /// Numbered section title, e.g. `CONCEPTOS CLAVE`.
    pub title: &'static str,
    /// Context field echoed under this section, if the area collects one.
    pub context_field: Option<&'static str>,
    /// Intro verb, e.g. `Generar` / `Proponer`.
    pub verb: &'static str,
    /// Intro noun phrase, e.g. `conceptos disruptivos`.
    pub noun: &'static str,
    /// Heading noun for each numbered proposal, e.g. `CONCEPTO`.
    pub item_heading: &'static str,
    /// Plural used in the continuation line, e.g. `conceptos`.
    pub item_plural: &'static str,
    /// Ordered labeled sub-fields each proposal must carry.
    pub labels: &'static [&'static str],
    /// Proposals requested per sub-topic.
    pub count: u8,
    /// Count under the context-aware strategy (5 for area-wide idea batches).
    pub count_context_aware: u8,
}

/// Header line rendered before the sections: label + backing field.
#[derive(Debug)]
pub struct HeaderField {
    pub label: &'static str,
    pub field: &'static str,
}

/// Everything the composer needs to know about one area.
#[derive(Debug)]
pub struct AreaSchema {
    pub area: Area,
    /// Ordered recognized context field names (wire names), base schema.
    pub fields: &'static [&'static str],
    pub header: &'static [HeaderField],
    pub sections: &'static [Section],
}

/// Alignment fields recognized in addition to the base schema when the
/// deployment runs the context-aware strategy.
pub const ALIGNMENT_FIELDS: &[&str] = &["marca", "objetivo", "target", "restricciones", "presupuesto"];

/// Explicit marker for missing fields in context-aware mode. Minimal mode
/// keeps the raw empty string; the two conventions must not be mixed.
pub const NOT_SPECIFIED: &str = "No especificado";

const fn section(
    title: &'static str,
    context_field: Option<&'static str>,
    verb: &'static str,
    noun: &'static str,
    item_heading: &'static str,
    item_plural: &'static str,
    labels: &'static [&'static str],
) -> Section {
    Section {
        title,
        context_field,
        verb,
        noun,
        item_heading,
        item_plural,
        labels,
        count: 3,
        count_context_aware: 3,
    }
}

static BTL_SCHEMA: AreaSchema = AreaSchema {
    area: Area::Btl,
    fields: &[
        "solicitud",
        "conceptos",
        "locaciones",
        "antes-despues",
        "momento-peak",
        "activaciones",
        "puesta-escena",
        "forma-invitar",
    ],
    header: &[HeaderField {
        label: "SOLICITUD PRINCIPAL",
        field: "solicitud",
    }],
    sections: &[
        section(
            "CONCEPTOS CLAVE",
            Some("conceptos"),
            "Generar",
            "conceptos disruptivos",
            "CONCEPTO",
            "conceptos",
            &["Descripción", "Por qué es disruptivo", "Elementos innovadores"],
        ),
        section(
            "LOCACIONES",
            Some("locaciones"),
            "Proponer",
            "locaciones disruptivas",
            "LOCACIÓN",
            "locaciones",
            &["Descripción del espacio", "Por qué es disruptiva", "Ventajas únicas"],
        ),
        section(
            "ANTES Y DESPUÉS",
            Some("antes-despues"),
            "Proponer",
            "ideas de transformación",
            "TRANSFORMACIÓN",
            "transformaciones",
            &["Descripción del cambio", "Impacto visual", "Elementos sorpresa"],
        ),
        section(
            "MOMENTO PEAK",
            Some("momento-peak"),
            "Proponer",
            "momentos peak",
            "MOMENTO",
            "momentos",
            &["Descripción del momento", "Factor sorpresa", "Impacto esperado"],
        ),
        section(
            "ACTIVACIONES",
            Some("activaciones"),
            "Proponer",
            "activaciones disruptivas",
            "ACTIVACIÓN",
            "activaciones",
            &["Descripción", "Elementos innovadores", "Interacción con el público"],
        ),
        section(
            "PUESTA EN ESCENA",
            Some("puesta-escena"),
            "Proponer",
            "puestas en escena",
            "ESCENA",
            "escenas",
            &["Descripción visual", "Elementos destacados", "Factor wow"],
        ),
        section(
            "FORMA DE INVITAR",
            Some("forma-invitar"),
            "Proponer",
            "formas disruptivas de invitar",
            "INVITACIÓN",
            "invitaciones",
            &["Descripción del método", "Factor sorpresa", "Llamado a la acción"],
        ),
    ],
};

static TRADE_SCHEMA: AreaSchema = AreaSchema {
    area: Area::Trade,
    fields: &["solicitud", "material-pop", "dinamicas", "materialidad"],
    header: &[HeaderField {
        label: "SOLICITUD PRINCIPAL",
        field: "solicitud",
    }],
    sections: &[
        section(
            "MATERIAL POP",
            Some("material-pop"),
            "Generar",
            "propuestas disruptivas",
            "PROPUESTA",
            "propuestas",
            &["Descripción del material", "Innovación principal", "Impacto en punto de venta"],
        ),
        section(
            "DINÁMICAS",
            Some("dinamicas"),
            "Proponer",
            "dinámicas innovadoras",
            "DINÁMICA",
            "dinámicas",
            &["Descripción", "Elementos disruptivos", "Interacción con el consumidor"],
        ),
        section(
            "MATERIALIDAD",
            Some("materialidad"),
            "Proponer",
            "conceptos de materiales",
            "MATERIAL",
            "materiales",
            &["Descripción", "Innovación", "Impacto visual"],
        ),
    ],
};

static DIGITAL_SCHEMA: AreaSchema = AreaSchema {
    area: Area::Digital,
    fields: &["solicitud", "contenido", "conceptos"],
    header: &[HeaderField {
        label: "SOLICITUD PRINCIPAL",
        field: "solicitud",
    }],
    sections: &[
        section(
            "CONTENIDO",
            Some("contenido"),
            "Generar",
            "propuestas de contenido",
            "CONTENIDO",
            "contenidos",
            &["Descripción", "Formato innovador", "Engagement esperado"],
        ),
        section(
            "CONCEPTOS",
            Some("conceptos"),
            "Proponer",
            "conceptos disruptivos",
            "CONCEPTO",
            "conceptos",
            &["Descripción", "Elementos innovadores", "Viralización esperada"],
        ),
        section(
            "PLATAFORMAS",
            None,
            "Proponer",
            "estrategias de plataformas",
            "ESTRATEGIA",
            "estrategias",
            &["Plataformas principales", "Uso innovador", "Integración cross-platform"],
        ),
    ],
};

static IDEAS_SCHEMA: AreaSchema = AreaSchema {
    area: Area::Ideas,
    fields: &["solicitud", "no-queremos"],
    header: &[
        HeaderField {
            label: "SOLICITUD PRINCIPAL",
            field: "solicitud",
        },
        HeaderField {
            label: "IDEAS A EVITAR",
            field: "no-queremos",
        },
    ],
    sections: &[
        // Area-wide idea batch: the context-aware strategy asks for 5 here.
        Section {
            title: "CONCEPTO GENERAL",
            context_field: None,
            verb: "Generar",
            noun: "ideas completamente disruptivas",
            item_heading: "IDEA",
            item_plural: "ideas",
            labels: &["Descripción del concepto", "Por qué es disruptivo", "Elementos innovadores"],
            count: 3,
            count_context_aware: 5,
        },
        section(
            "IMPLEMENTACIÓN",
            None,
            "Proponer",
            "propuestas de implementación",
            "PROPUESTA",
            "propuestas",
            &["Descripción detallada", "Aspectos técnicos", "Factores diferenciadores"],
        ),
        section(
            "IMPACTO ESPERADO",
            None,
            "Proponer",
            "impactos esperados",
            "IMPACTO",
            "impactos",
            &["Descripción del impacto", "Métricas esperadas", "Factores de éxito"],
        ),
    ],
};

/// Looks up the schema for a (well-known) area.
pub fn area_schema(area: Area) -> &'static AreaSchema {
    match area {
        Area::Btl => &BTL_SCHEMA,
        Area::Trade => &TRADE_SCHEMA,
        Area::Digital => &DIGITAL_SCHEMA,
        Area::Ideas => &IDEAS_SCHEMA,
    }
}

/// Ordered recognized context field names for an area under a given mode.
/// The context-aware schema extends the base field set with the
/// strategic-alignment fields.
pub fn recognized_fields(area: Area, mode: PromptMode) -> Vec<&'static str> {
    let base = area_schema(area).fields;
    match mode {
        PromptMode::Minimal | PromptMode::Avoidance => base.to_vec(),
        PromptMode::ContextAware => base
            .iter()
            .chain(ALIGNMENT_FIELDS.iter())
            .copied()
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_area_has_a_schema_with_sections() {
        for area in Area::ALL {
            let schema = area_schema(area);
            assert_eq!(schema.area, area);
            assert!(!schema.sections.is_empty());
            assert!(!schema.header.is_empty());
        }
    }

    #[test]
    fn test_btl_declares_seven_sections() {
        assert_eq!(area_schema(Area::Btl).sections.len(), 7);
    }

    #[test]
    fn test_section_counts_are_three_except_ideas_batch() {
        for area in Area::ALL {
            for s in area_schema(area).sections {
                assert_eq!(s.count, 3);
                if area == Area::Ideas && s.title == "CONCEPTO GENERAL" {
                    assert_eq!(s.count_context_aware, 5);
                } else {
                    assert_eq!(s.count_context_aware, 3);
                }
            }
        }
    }

    #[test]
    fn test_context_fields_are_declared_in_field_list() {
        for area in Area::ALL {
            let schema = area_schema(area);
            for s in schema.sections {
                if let Some(field) = s.context_field {
                    assert!(
                        schema.fields.contains(&field),
                        "{area}: section field {field} missing from field list"
                    );
                }
            }
            for h in schema.header {
                assert!(schema.fields.contains(&h.field));
            }
        }
    }

    #[test]
    fn test_context_aware_mode_adds_alignment_fields() {
        let minimal = recognized_fields(Area::Btl, PromptMode::Minimal);
        let aware = recognized_fields(Area::Btl, PromptMode::ContextAware);
        assert!(!minimal.contains(&"presupuesto"));
        assert!(aware.contains(&"marca"));
        assert!(aware.contains(&"presupuesto"));
        assert_eq!(aware.len(), minimal.len() + ALIGNMENT_FIELDS.len());
    }
}
