//! Creative areas and their typed context field sets.
//!
//! Each area's recognized fields are an explicit, versioned struct — not a
//! loose map — so adding or removing a field is a deliberate, reviewed
//! change. Absent fields deserialize to the empty string, never an error.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::errors::AppError;

/// The four supported creative domains. Chosen by the caller per request
/// via `area_solicitada`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Area {
    Btl,
    Trade,
    Digital,
    Ideas,
}

impl Area {
    #[allow(dead_code)]
    pub const ALL: [Area; 4] = [Area::Btl, Area::Trade, Area::Digital, Area::Ideas];

    /// The wire identifier, also used as the success-response key.
    pub fn as_str(&self) -> &'static str {
        match self {
            Area::Btl => "btl",
            Area::Trade => "trade",
            Area::Digital => "digital",
            Area::Ideas => "ideas",
        }
    }
}

impl FromStr for Area {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "btl" => Ok(Area::Btl),
            "trade" => Ok(Area::Trade),
            "digital" => Ok(Area::Digital),
            "ideas" => Ok(Area::Ideas),
            _ => Err(AppError::InvalidArea),
        }
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strategic-alignment fields introduced by the later context-aware
/// generation of the field schemas. Shared by all areas.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Alineacion {
    #[serde(default)]
    pub marca: String,
    #[serde(default)]
    pub objetivo: String,
    #[serde(default)]
    pub target: String,
    #[serde(default)]
    pub restricciones: String,
    #[serde(default)]
    pub presupuesto: String,
}

/// BTL activation context.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BtlContext {
    #[serde(default)]
    pub solicitud: String,
    #[serde(default)]
    pub conceptos: String,
    #[serde(default)]
    pub locaciones: String,
    #[serde(default, rename = "antes-despues")]
    pub antes_despues: String,
    #[serde(default, rename = "momento-peak")]
    pub momento_peak: String,
    #[serde(default)]
    pub activaciones: String,
    #[serde(default, rename = "puesta-escena")]
    pub puesta_escena: String,
    #[serde(default, rename = "forma-invitar")]
    pub forma_invitar: String,
    #[serde(flatten)]
    pub alineacion: Alineacion,
}

/// Trade-marketing context.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TradeContext {
    #[serde(default)]
    pub solicitud: String,
    #[serde(default, rename = "material-pop")]
    pub material_pop: String,
    #[serde(default)]
    pub dinamicas: String,
    #[serde(default)]
    pub materialidad: String,
    #[serde(flatten)]
    pub alineacion: Alineacion,
}

/// Digital-campaign context.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DigitalContext {
    #[serde(default)]
    pub solicitud: String,
    #[serde(default)]
    pub contenido: String,
    #[serde(default)]
    pub conceptos: String,
    #[serde(flatten)]
    pub alineacion: Alineacion,
}

/// Free-form ideas context.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IdeasContext {
    #[serde(default)]
    pub solicitud: String,
    #[serde(default, rename = "no-queremos")]
    pub no_queremos: String,
    #[serde(flatten)]
    pub alineacion: Alineacion,
}

/// A typed context for exactly one area.
#[derive(Debug, Clone)]
pub enum AreaContext {
    Btl(BtlContext),
    Trade(TradeContext),
    Digital(DigitalContext),
    Ideas(IdeasContext),
}

impl AreaContext {
    pub fn area(&self) -> Area {
        match self {
            AreaContext::Btl(_) => Area::Btl,
            AreaContext::Trade(_) => Area::Trade,
            AreaContext::Digital(_) => Area::Digital,
            AreaContext::Ideas(_) => Area::Ideas,
        }
    }

    pub fn alineacion(&self) -> &Alineacion {
        match self {
            AreaContext::Btl(c) => &c.alineacion,
            AreaContext::Trade(c) => &c.alineacion,
            AreaContext::Digital(c) => &c.alineacion,
            AreaContext::Ideas(c) => &c.alineacion,
        }
    }

    /// Value of a recognized context field by its wire name.
    /// Unrecognized names resolve to the empty string — composition is a
    /// total function and never fails for a known area.
    pub fn field(&self, name: &str) -> &str {
        match self {
            AreaContext::Btl(c) => match name {
                "solicitud" => &c.solicitud,
                "conceptos" => &c.conceptos,
                "locaciones" => &c.locaciones,
                "antes-despues" => &c.antes_despues,
                "momento-peak" => &c.momento_peak,
                "activaciones" => &c.activaciones,
                "puesta-escena" => &c.puesta_escena,
                "forma-invitar" => &c.forma_invitar,
                _ => "",
            },
            AreaContext::Trade(c) => match name {
                "solicitud" => &c.solicitud,
                "material-pop" => &c.material_pop,
                "dinamicas" => &c.dinamicas,
                "materialidad" => &c.materialidad,
                _ => "",
            },
            AreaContext::Digital(c) => match name {
                "solicitud" => &c.solicitud,
                "contenido" => &c.contenido,
                "conceptos" => &c.conceptos,
                _ => "",
            },
            AreaContext::Ideas(c) => match name {
                "solicitud" => &c.solicitud,
                "no-queremos" => &c.no_queremos,
                _ => "",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area_parses_wire_identifiers() {
        assert_eq!("btl".parse::<Area>().unwrap(), Area::Btl);
        assert_eq!("trade".parse::<Area>().unwrap(), Area::Trade);
        assert_eq!("digital".parse::<Area>().unwrap(), Area::Digital);
        assert_eq!("ideas".parse::<Area>().unwrap(), Area::Ideas);
    }

    #[test]
    fn test_unknown_area_is_invalid() {
        let err = "foo".parse::<Area>().unwrap_err();
        assert!(matches!(err, AppError::InvalidArea));
        assert_eq!(err.to_string(), "Área no válida");
    }

    #[test]
    fn test_btl_context_absent_fields_default_to_empty() {
        let ctx: BtlContext = serde_json::from_str("{}").unwrap();
        assert_eq!(ctx.solicitud, "");
        assert_eq!(ctx.momento_peak, "");
        assert_eq!(ctx.alineacion.marca, "");
    }

    #[test]
    fn test_hyphenated_wire_names_map_to_fields() {
        let ctx: BtlContext = serde_json::from_str(
            r#"{"antes-despues": "cambio total", "forma-invitar": "por drones"}"#,
        )
        .unwrap();
        assert_eq!(ctx.antes_despues, "cambio total");
        assert_eq!(ctx.forma_invitar, "por drones");
    }

    #[test]
    fn test_alignment_fields_flatten_from_section_object() {
        let ctx: IdeasContext = serde_json::from_str(
            r#"{"solicitud": "lanzamiento", "no-queremos": "gimnasios", "marca": "Volt"}"#,
        )
        .unwrap();
        assert_eq!(ctx.no_queremos, "gimnasios");
        assert_eq!(ctx.alineacion.marca, "Volt");
    }

    #[test]
    fn test_field_lookup_preserves_non_ascii() {
        let ctx = AreaContext::Btl(BtlContext {
            conceptos: "activación con piñatas ñoñas".to_string(),
            ..Default::default()
        });
        assert_eq!(ctx.field("conceptos"), "activación con piñatas ñoñas");
        assert_eq!(ctx.field("inexistente"), "");
    }
}
