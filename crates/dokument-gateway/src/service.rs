//! JournalpostService - backend selection and case journal aggregation

use std::sync::Arc;

use dokument_core::{
    AvvikType, Avvikshendelse, BackendResult, BearerToken, CreatedDeviationRef,
    EditJournalEntryCommand, JournalBackend, JournalEntry, RegisterJournalEntryCommand,
    SourceSystem, StatusResult, TaggedIdentifier,
};
use tracing::debug;

/// Routes journal requests to the backend owning the identifier.
///
/// `bid` identifiers go to the bidrag journal, everything else goes to the
/// archive. Deviations and writes exist only in the bidrag journal.
///
/// Only transport failures come back as `Err`; backend statuses and
/// business refusals are carried in the [`StatusResult`].
pub struct JournalpostService {
    journalpost: Arc<dyn JournalBackend>,
    arkiv: Arc<dyn JournalBackend>,
}

impl JournalpostService {
    pub fn new(journalpost: Arc<dyn JournalBackend>, arkiv: Arc<dyn JournalBackend>) -> Self {
        Self { journalpost, arkiv }
    }

    fn owner_of(&self, id: &TaggedIdentifier) -> &Arc<dyn JournalBackend> {
        match id.source_system() {
            SourceSystem::Bidrag => &self.journalpost,
            SourceSystem::Joark | SourceSystem::Gsak | SourceSystem::Unknown => &self.arkiv,
        }
    }

    /// Fetch one journal entry from the backend owning `id`
    pub async fn fetch_entry(
        &self,
        id: &TaggedIdentifier,
        bearer: &BearerToken,
    ) -> BackendResult<StatusResult<JournalEntry>> {
        self.owner_of(id).fetch_entry(id, bearer).await
    }

    /// Case journal from both backends, bidrag entries first.
    ///
    /// Both backends are queried concurrently. A backend answering without
    /// success contributes nothing. No entries at all gives `204`.
    pub async fn find_entries(
        &self,
        case_number: &str,
        domain_area: &str,
        bearer: &BearerToken,
    ) -> BackendResult<StatusResult<Vec<JournalEntry>>> {
        let (from_journalpost, from_arkiv) = tokio::try_join!(
            self.journalpost.find_entries(case_number, domain_area, bearer),
            self.arkiv.find_entries(case_number, domain_area, bearer),
        )?;

        let mut entries = from_journalpost.into_list();
        entries.extend(from_arkiv.into_list());

        if entries.is_empty() {
            Ok(StatusResult::no_content())
        } else {
            Ok(StatusResult::ok(entries))
        }
    }

    /// Deviation kinds available for an entry; only bidrag entries have any
    pub async fn find_deviations(
        &self,
        case_number: &str,
        id: &TaggedIdentifier,
        bearer: &BearerToken,
    ) -> BackendResult<StatusResult<Vec<AvvikType>>> {
        if id.is_for(SourceSystem::Bidrag) {
            return self.journalpost.find_deviations(case_number, id, bearer).await;
        }

        debug!(id = %id, "Deviations are only kept for bidrag entries");
        Ok(StatusResult::bad_request())
    }

    /// Raise a deviation; only bidrag entries accept one
    pub async fn create_deviation(
        &self,
        unit: &str,
        id: &TaggedIdentifier,
        event: &Avvikshendelse,
        bearer: &BearerToken,
    ) -> BackendResult<StatusResult<CreatedDeviationRef>> {
        if id.is_for(SourceSystem::Bidrag) {
            return self
                .journalpost
                .create_deviation(unit, id, event, bearer)
                .await;
        }

        debug!(id = %id, avvik_type = ?event.avvik_type(), "Deviations are only kept for bidrag entries");
        Ok(StatusResult::bad_request())
    }

    /// Edit a journal entry in the bidrag journal
    pub async fn update(
        &self,
        unit: &str,
        command: &EditJournalEntryCommand,
        bearer: &BearerToken,
    ) -> BackendResult<StatusResult<()>> {
        self.journalpost.update(unit, command, bearer).await
    }

    /// Register a journal entry, carried out as an edit in the bidrag journal
    pub async fn register(
        &self,
        unit: &str,
        command: &RegisterJournalEntryCommand,
        bearer: &BearerToken,
    ) -> BackendResult<StatusResult<()>> {
        self.journalpost.update(unit, &to_edit(command), bearer).await
    }
}

/// Copy the fields of a registration that an edit understands
fn to_edit(command: &RegisterJournalEntryCommand) -> EditJournalEntryCommand {
    EditJournalEntryCommand {
        id: command.id.clone(),
        sender_name: command.sender_name.clone(),
        theme: command.theme.clone(),
        document_date: command.document_date,
        document_edits: command.document_edits.clone(),
        domain_area: command.domain_area.clone(),
        subject: command.subject.clone(),
        subject_type: command.subject_type.clone(),
        routing_unit: command.routing_unit.clone(),
        linked_cases: command.case_numbers.clone(),
        title: command.title.clone(),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use async_trait::async_trait;
    use chrono::NaiveDate;
    use dokument_core::{parse, BackendError, EditDocument};
    use http::StatusCode;
    use parking_lot::Mutex;
    use pretty_assertions::assert_eq;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Fetch(String),
        Find(String, String),
        Deviations(String, String),
        CreateDeviation(String, String),
        Update(String, EditJournalEntryCommand),
    }

    /// Hand-written backend that records calls and answers from fixed data
    struct MockBackend {
        name: &'static str,
        entries: Vec<JournalEntry>,
        delay: Duration,
        fail: bool,
        calls: Mutex<Vec<Call>>,
    }

    impl MockBackend {
        fn new(name: &'static str) -> Self {
            Self {
                name,
                entries: Vec::new(),
                delay: Duration::ZERO,
                fail: false,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn with_entries(mut self, ids: &[&str]) -> Self {
            self.entries = ids
                .iter()
                .map(|id| JournalEntry {
                    id: Some(id.to_string()),
                    ..Default::default()
                })
                .collect();
            self
        }

        fn with_delay(mut self, delay: Duration) -> Self {
            self.delay = delay;
            self
        }

        fn failing(mut self) -> Self {
            self.fail = true;
            self
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.lock().clone()
        }

        fn check(&self) -> BackendResult<()> {
            if self.fail {
                Err(BackendError::Transport("connection refused".into()))
            } else {
                Ok(())
            }
        }
    }

    #[async_trait]
    impl JournalBackend for MockBackend {
        fn name(&self) -> &str {
            self.name
        }

        async fn fetch_entry(
            &self,
            id: &TaggedIdentifier,
            _bearer: &BearerToken,
        ) -> BackendResult<StatusResult<JournalEntry>> {
            self.calls.lock().push(Call::Fetch(id.to_string()));
            self.check()?;
            Ok(StatusResult::new(StatusCode::OK, self.entries.first().cloned()))
        }

        async fn find_entries(
            &self,
            case_number: &str,
            domain_area: &str,
            _bearer: &BearerToken,
        ) -> BackendResult<StatusResult<Vec<JournalEntry>>> {
            self.calls
                .lock()
                .push(Call::Find(case_number.to_string(), domain_area.to_string()));
            tokio::time::sleep(self.delay).await;
            self.check()?;
            if self.entries.is_empty() {
                Ok(StatusResult::no_content())
            } else {
                Ok(StatusResult::ok(self.entries.clone()))
            }
        }

        async fn find_deviations(
            &self,
            case_number: &str,
            id: &TaggedIdentifier,
            _bearer: &BearerToken,
        ) -> BackendResult<StatusResult<Vec<AvvikType>>> {
            self.calls
                .lock()
                .push(Call::Deviations(case_number.to_string(), id.to_string()));
            Ok(StatusResult::ok(vec![AvvikType::BestillOrginal]))
        }

        async fn create_deviation(
            &self,
            unit: &str,
            id: &TaggedIdentifier,
            event: &Avvikshendelse,
            _bearer: &BearerToken,
        ) -> BackendResult<StatusResult<CreatedDeviationRef>> {
            self.calls
                .lock()
                .push(Call::CreateDeviation(unit.to_string(), id.to_string()));
            Ok(StatusResult::new(
                StatusCode::CREATED,
                Some(CreatedDeviationRef {
                    avvik_type: event.avvik_type(),
                    task_id: None,
                }),
            ))
        }

        async fn update(
            &self,
            unit: &str,
            command: &EditJournalEntryCommand,
            _bearer: &BearerToken,
        ) -> BackendResult<StatusResult<()>> {
            self.calls
                .lock()
                .push(Call::Update(unit.to_string(), command.clone()));
            self.check()?;
            Ok(StatusResult::new(StatusCode::ACCEPTED, Some(())))
        }
    }

    fn service(a: MockBackend, b: MockBackend) -> (JournalpostService, Arc<MockBackend>, Arc<MockBackend>) {
        let a = Arc::new(a);
        let b = Arc::new(b);
        (JournalpostService::new(a.clone(), b.clone()), a, b)
    }

    fn bearer() -> BearerToken {
        BearerToken::new("token")
    }

    fn ids(entries: &[JournalEntry]) -> Vec<&str> {
        entries.iter().filter_map(|e| e.id.as_deref()).collect()
    }

    #[tokio::test]
    async fn fetch_entry_routes_bid_to_journalpost() {
        let (service, a, b) = service(
            MockBackend::new("a").with_entries(&["BID-1"]),
            MockBackend::new("b"),
        );

        let result = service.fetch_entry(&parse("bid-1").unwrap(), &bearer()).await.unwrap();

        assert_eq!(result.status(), StatusCode::OK);
        assert_eq!(a.calls(), vec![Call::Fetch("bid-1".into())]);
        assert!(b.calls().is_empty());
    }

    #[tokio::test]
    async fn fetch_entry_routes_other_systems_to_arkiv() {
        let (service, a, b) = service(MockBackend::new("a"), MockBackend::new("b"));

        let joark = service.fetch_entry(&parse("joark-1").unwrap(), &bearer()).await.unwrap();
        service.fetch_entry(&parse("gsak-x9").unwrap(), &bearer()).await.unwrap();

        assert_eq!(joark.status(), StatusCode::NO_CONTENT);
        assert!(a.calls().is_empty());
        assert_eq!(
            b.calls(),
            vec![Call::Fetch("joark-1".into()), Call::Fetch("gsak-x9".into())]
        );
    }

    #[tokio::test]
    async fn find_entries_puts_journalpost_before_arkiv() {
        let (service, _, _) = service(
            MockBackend::new("a")
                .with_entries(&["BID-1", "BID-2"])
                .with_delay(Duration::from_millis(50)),
            MockBackend::new("b").with_entries(&["JOARK-3"]),
        );

        let result = service.find_entries("101", "BID", &bearer()).await.unwrap();

        assert_eq!(result.status(), StatusCode::OK);
        assert_eq!(ids(result.body().unwrap()), vec!["BID-1", "BID-2", "JOARK-3"]);
    }

    #[tokio::test]
    async fn find_entries_keeps_one_sided_results() {
        let (service, a, b) = service(
            MockBackend::new("a"),
            MockBackend::new("b").with_entries(&["JOARK-3"]),
        );

        let result = service.find_entries("101", "FAR", &bearer()).await.unwrap();

        assert_eq!(ids(result.body().unwrap()), vec!["JOARK-3"]);
        assert_eq!(a.calls(), vec![Call::Find("101".into(), "FAR".into())]);
        assert_eq!(b.calls(), vec![Call::Find("101".into(), "FAR".into())]);
    }

    #[tokio::test]
    async fn find_entries_without_entries_is_no_content() {
        let (service, _, _) = service(MockBackend::new("a"), MockBackend::new("b"));

        let result = service.find_entries("101", "BID", &bearer()).await.unwrap();

        assert_eq!(result.status(), StatusCode::NO_CONTENT);
        assert!(result.body().is_none());
    }

    #[tokio::test]
    async fn find_entries_propagates_transport_failure() {
        let (service, _, _) = service(
            MockBackend::new("a").with_entries(&["BID-1"]),
            MockBackend::new("b").failing(),
        );

        let result = service.find_entries("101", "BID", &bearer()).await;

        assert!(matches!(result, Err(BackendError::Transport(_))));
    }

    #[tokio::test]
    async fn find_deviations_only_for_bid() {
        let (service, a, b) = service(MockBackend::new("a"), MockBackend::new("b"));

        let bid = service
            .find_deviations("101", &parse("bid-1").unwrap(), &bearer())
            .await
            .unwrap();
        let joark = service
            .find_deviations("101", &parse("joark-1").unwrap(), &bearer())
            .await
            .unwrap();
        let gsak = service
            .find_deviations("101", &parse("gsak-1").unwrap(), &bearer())
            .await
            .unwrap();

        assert_eq!(bid.into_list(), vec![AvvikType::BestillOrginal]);
        assert_eq!(joark.status(), StatusCode::BAD_REQUEST);
        assert!(joark.into_list().is_empty());
        assert_eq!(gsak.status(), StatusCode::BAD_REQUEST);
        assert_eq!(a.calls(), vec![Call::Deviations("101".into(), "bid-1".into())]);
        assert!(b.calls().is_empty());
    }

    #[tokio::test]
    async fn create_deviation_only_for_bid() {
        let (service, a, b) = service(MockBackend::new("a"), MockBackend::new("b"));
        let event = Avvikshendelse::TrekkJournalpost { description: None };

        let bid = service
            .create_deviation("4806", &parse("bid-1").unwrap(), &event, &bearer())
            .await
            .unwrap();
        let joark = service
            .create_deviation("4806", &parse("joark-1").unwrap(), &event, &bearer())
            .await
            .unwrap();

        assert_eq!(bid.status(), StatusCode::CREATED);
        assert_eq!(
            bid.body().map(|r| r.avvik_type),
            Some(AvvikType::TrekkJournalpost)
        );
        assert_eq!(joark.status(), StatusCode::BAD_REQUEST);
        assert!(joark.body().is_none());
        assert_eq!(
            a.calls(),
            vec![Call::CreateDeviation("4806".into(), "bid-1".into())]
        );
        assert!(b.calls().is_empty());
    }

    #[tokio::test]
    async fn update_goes_to_journalpost() {
        let (service, a, b) = service(MockBackend::new("a"), MockBackend::new("b"));
        let command = EditJournalEntryCommand {
            id: Some("BID-1".into()),
            file_entry: true,
            ..Default::default()
        };

        let result = service.update("4806", &command, &bearer()).await.unwrap();

        assert_eq!(result.status(), StatusCode::ACCEPTED);
        assert_eq!(a.calls(), vec![Call::Update("4806".into(), command)]);
        assert!(b.calls().is_empty());
    }

    #[tokio::test]
    async fn register_projects_onto_an_edit() {
        let (service, a, _) = service(MockBackend::new("a"), MockBackend::new("b"));
        let date = NaiveDate::from_ymd_opt(2019, 1, 31).unwrap();
        let edits = vec![EditDocument {
            letter_code: Some("BI01A01".into()),
            document_id: Some("1".into()),
            title: Some("Vedtak".into()),
        }];
        let command = RegisterJournalEntryCommand {
            id: Some("BID-1".into()),
            sender_name: Some("Grev Still E. Ben".into()),
            theme: Some("BI01".into()),
            document_date: Some(date),
            document_edits: edits.clone(),
            domain_area: Some("BID".into()),
            subject: Some("06127412345".into()),
            subject_type: Some("P".into()),
            routing_unit: Some("4806".into()),
            case_numbers: vec!["101".into(), "102".into()],
            title: Some("Søknad".into()),
        };

        service.register("4806", &command, &bearer()).await.unwrap();

        let expected = EditJournalEntryCommand {
            id: Some("BID-1".into()),
            sender_name: Some("Grev Still E. Ben".into()),
            theme: Some("BI01".into()),
            document_date: Some(date),
            document_edits: edits,
            domain_area: Some("BID".into()),
            subject: Some("06127412345".into()),
            subject_type: Some("P".into()),
            routing_unit: Some("4806".into()),
            linked_cases: vec!["101".into(), "102".into()],
            title: Some("Søknad".into()),
            received_date: None,
            file_entry: false,
        };
        assert_eq!(a.calls(), vec![Call::Update("4806".into(), expected)]);
    }

    #[tokio::test]
    async fn register_propagates_transport_failure() {
        let (service, _, _) = service(MockBackend::new("a").failing(), MockBackend::new("b"));

        let result = service
            .register("4806", &RegisterJournalEntryCommand::default(), &bearer())
            .await;

        assert!(matches!(result, Err(BackendError::Transport(_))));
    }
}
