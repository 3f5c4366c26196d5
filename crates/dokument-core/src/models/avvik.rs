//! Deviation (avvik) models
//!
//! A deviation is a correction raised against a single journal entry.
//! Only bidrag-dokument-journalpost handles them.

use serde::{Deserialize, Serialize};

/// Kind of deviation that can be raised against a journal entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AvvikType {
    BestillOrginal,
    BestillReskanning,
    BestillSplitting,
    EndreFagomrade,
    InngTilUtgDokument,
    OverforTilAnnenEnhet,
    TrekkJournalpost,
}

/// A deviation event, tagged on `avvikType` with the data needed to enact it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "avvikType", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Avvikshendelse {
    /// Request the original paper copy
    BestillOrginal,
    BestillReskanning {
        #[serde(rename = "beskrivelse", skip_serializing_if = "Option::is_none")]
        description: Option<String>,
    },
    BestillSplitting {
        #[serde(rename = "beskrivelse")]
        description: String,
    },
    EndreFagomrade {
        #[serde(rename = "nyttFagomrade")]
        new_domain_area: String,
    },
    /// Incoming document registered as outgoing
    InngTilUtgDokument,
    OverforTilAnnenEnhet {
        #[serde(rename = "nyJournalforendeEnhet")]
        new_unit: String,
    },
    TrekkJournalpost {
        #[serde(rename = "beskrivelse", skip_serializing_if = "Option::is_none")]
        description: Option<String>,
    },
}

impl Avvikshendelse {
    pub fn avvik_type(&self) -> AvvikType {
        match self {
            Avvikshendelse::BestillOrginal => AvvikType::BestillOrginal,
            Avvikshendelse::BestillReskanning { .. } => AvvikType::BestillReskanning,
            Avvikshendelse::BestillSplitting { .. } => AvvikType::BestillSplitting,
            Avvikshendelse::EndreFagomrade { .. } => AvvikType::EndreFagomrade,
            Avvikshendelse::InngTilUtgDokument => AvvikType::InngTilUtgDokument,
            Avvikshendelse::OverforTilAnnenEnhet { .. } => AvvikType::OverforTilAnnenEnhet,
            Avvikshendelse::TrekkJournalpost { .. } => AvvikType::TrekkJournalpost,
        }
    }
}

/// Reference to a created deviation (OpprettAvvikshendelseResponse)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedDeviationRef {
    #[serde(rename = "avvikType")]
    pub avvik_type: AvvikType,
    /// Task created in the case worker's queue, if any
    #[serde(rename = "oppgaveId", skip_serializing_if = "Option::is_none")]
    pub task_id: Option<u64>,
}
