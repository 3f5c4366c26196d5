//! Journal entry models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A filed document record (journalpost) in either backend
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Tagged id, e.g. `BID-101`
    #[serde(rename = "journalpostId", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "avsenderNavn", skip_serializing_if = "Option::is_none")]
    pub sender_name: Option<String>,
    #[serde(rename = "dokumenter", default)]
    pub documents: Vec<Document>,
    #[serde(rename = "dokumentDato", skip_serializing_if = "Option::is_none")]
    pub document_date: Option<NaiveDate>,
    /// Domain area code (BID, FAR)
    #[serde(rename = "fagomrade", skip_serializing_if = "Option::is_none")]
    pub domain_area: Option<String>,
    #[serde(rename = "gjelderAktor", skip_serializing_if = "Option::is_none")]
    pub subject: Option<Actor>,
    #[serde(rename = "innhold", skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(rename = "journalforendeEnhet", skip_serializing_if = "Option::is_none")]
    pub routing_unit: Option<String>,
    #[serde(rename = "journalfortAv", skip_serializing_if = "Option::is_none")]
    pub filed_by: Option<String>,
    #[serde(rename = "journalfortDato", skip_serializing_if = "Option::is_none")]
    pub filed_date: Option<NaiveDate>,
    #[serde(rename = "journalstatus", skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(rename = "mottattDato", skip_serializing_if = "Option::is_none")]
    pub received_date: Option<NaiveDate>,
    /// Cases this entry is linked to
    #[serde(rename = "saksnummer", default)]
    pub case_numbers: Vec<String>,
}

/// A document within a journal entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(rename = "dokumentreferanse", skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(rename = "dokumentType", skip_serializing_if = "Option::is_none")]
    pub document_type: Option<String>,
    #[serde(rename = "tittel", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// The person or organisation a journal entry concerns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub ident: String,
}

impl Actor {
    pub fn new(ident: impl Into<String>) -> Self {
        Self {
            ident: ident.into(),
        }
    }
}
