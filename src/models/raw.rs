//! Wire records as delivered by the remote service (Portuguese field names).
//! Everything is optional and textual here; conversion into domain types
//! happens in the sibling modules and never fails for a whole list.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Ids arrive either as numbers or strings depending on the endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Num(i64),
    Text(String),
}

impl fmt::Display for RawId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawId::Num(n) => write!(f, "{n}"),
            RawId::Text(s) => f.write_str(s),
        }
    }
}

/// One explicit meeting: a plain date string or an object with optional times.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawMeeting {
    Plain(String),
    Detailed {
        #[serde(default)]
        data: Option<String>,
        #[serde(default)]
        horario_inicio: Option<String>,
        #[serde(default)]
        horario_fim: Option<String>,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawCohort {
    pub id: RawId,
    #[serde(default)]
    pub nome: Option<String>,
    #[serde(default)]
    pub data_inicio: Option<String>,
    #[serde(default)]
    pub data_fim: Option<String>,
    #[serde(default)]
    pub horario_inicio: Option<String>,
    #[serde(default)]
    pub horario_fim: Option<String>,
    #[serde(default)]
    pub datas: Option<Vec<RawMeeting>>,
    #[serde(default)]
    pub encontros: Option<Vec<RawMeeting>>,
}

impl RawCohort {
    /// `encontros` wins over `datas` when both are present and non-empty.
    pub fn explicit_meetings(&self) -> &[RawMeeting] {
        match (&self.encontros, &self.datas) {
            (Some(e), _) if !e.is_empty() => e,
            (_, Some(d)) => d,
            _ => &[],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawEvent {
    pub id: RawId,
    #[serde(default)]
    pub titulo: Option<String>,
    #[serde(default)]
    pub turmas: Option<Vec<RawCohort>>,
    #[serde(default)]
    pub data_inicio: Option<String>,
    #[serde(default)]
    pub data_fim: Option<String>,
    #[serde(default)]
    pub horario_inicio: Option<String>,
    #[serde(default)]
    pub horario_fim: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawAttendance {
    pub usuario_id: RawId,
    pub turma_id: RawId,
    pub data: String,
    #[serde(default)]
    pub presente: bool,
    #[serde(default)]
    pub confirmado_em: Option<String>,
}
