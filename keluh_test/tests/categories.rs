use std::sync::Mutex;

use async_trait::async_trait;
use keluh_test_util::prelude::*;



fn category_ids(categories: &[Category]) -> Vec<u64> {
    categories
        .iter()
        .map(|category| category.id.into_inner())
        .collect()
}


/// Answers every prompt with a fixed outcome and remembers what it was asked about.
struct RecordingConfirmation {
    outcome: ConfirmationOutcome,
    prompts: Mutex<Vec<(CategoryId, Option<String>)>>,
}

impl RecordingConfirmation {
    fn new(outcome: ConfirmationOutcome) -> Self {
        Self {
            outcome,
            prompts: Mutex::new(Vec::new()),
        }
    }

    fn prompts(&self) -> Vec<(CategoryId, Option<String>)> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ConfirmDeletion for RecordingConfirmation {
    async fn confirm_deletion(
        &self,
        category_id: CategoryId,
        category_name: Option<&str>,
    ) -> ConfirmationOutcome {
        self.prompts
            .lock()
            .unwrap()
            .push((category_id, category_name.map(str::to_string)));

        self.outcome
    }
}



#[tokio::test]
async fn loading_mirrors_the_server_collection() {
    let backend = prepare_mock_backend().await;
    let seeded_categories = seed_sample_categories(
        &backend,
        &[
            SampleCategory::JalanRusak,
            SampleCategory::Banjir,
            SampleCategory::Sampah,
        ],
    );

    let (store, notifier) = backend.store(Arc::new(ConfirmationOutcome::Confirmed));
    assert!(store.categories().is_empty());

    store.load().await.unwrap();

    assert_eq!(store.categories().as_slice(), seeded_categories.as_slice());
    assert_eq!(
        store.get(CategoryId::new(2)).map(|category| category.name),
        Some("Banjir".to_string())
    );
    assert_eq!(store.get(CategoryId::new(7)), None);
    assert_eq!(store.mutation_state(), MutationState::Idle);

    // Successful loads are silent.
    assert!(notifier.notifications().is_empty());
}


#[tokio::test]
async fn failed_load_keeps_the_previous_mirror() {
    let backend = prepare_mock_backend().await;
    seed_sample_categories(
        &backend,
        &[SampleCategory::JalanRusak, SampleCategory::Banjir],
    );

    let (store, notifier) = backend.store(Arc::new(ConfirmationOutcome::Confirmed));
    store.load().await.unwrap();
    let categories_before = store.categories();

    backend.insert_category("Lampu Jalan", "Lampu penerangan jalan mati");
    backend.fail_next(MockOperation::List, StatusCode::INTERNAL_SERVER_ERROR);

    let error = store.load().await.unwrap_err();
    assert!(matches!(
        error,
        CategoryStoreError::RemoteRejection {
            status_code: StatusCode::INTERNAL_SERVER_ERROR,
            ..
        }
    ));

    assert_eq!(store.categories(), categories_before);

    let notification = notifier.last().unwrap();
    assert_eq!(notification.kind, NotificationKind::Error);
    assert!(notification
        .message
        .starts_with("Gagal memuat kategori: "));
    assert!(notification.message.contains("injected failure"));


    // The next successful load picks up everything the server has.
    store.load().await.unwrap();
    assert_eq!(category_ids(&store.categories()), vec![1, 2, 3]);
}


#[tokio::test]
async fn unreachable_server_reports_a_network_error() {
    let notifier = Arc::new(RecordingNotifier::new());

    let client = Client::new(Arc::new(unreachable_api_server()), ClientOptions::default())
        .unwrap()
        .with_credentials(Arc::new(AccessToken::new(TEST_ACCESS_TOKEN)));

    let store = CategoryStore::new(
        client,
        Arc::new(ConfirmationOutcome::Confirmed),
        notifier.clone(),
    );

    let error = store.load().await.unwrap_err();
    assert!(matches!(error, CategoryStoreError::Network { .. }));
    assert!(store.categories().is_empty());

    assert_eq!(
        notifier.last(),
        Some(Notification::error(
            "Gagal memuat kategori: unable to reach the server"
        ))
    );
}


#[tokio::test]
async fn creation_is_reconciled_with_the_server() {
    let backend = prepare_mock_backend().await;
    seed_sample_categories(&backend, &[SampleCategory::JalanRusak]);

    let (store, notifier) = backend.store(Arc::new(ConfirmationOutcome::Confirmed));
    store.load().await.unwrap();

    store
        .create(&SampleCategory::Banjir.draft())
        .await
        .unwrap();

    // The mirror carries the server-assigned id and timestamps, not the draft.
    let categories = store.categories();
    assert_eq!(category_ids(&categories), vec![1, 2]);
    assert_eq!(categories[1].name, "Banjir");
    assert!(categories[1].created_at.is_some());
    assert_eq!(categories.as_slice(), backend.categories().as_slice());

    assert_eq!(backend.request_count(MockOperation::Create), 1);
    assert_eq!(backend.request_count(MockOperation::List), 2);

    assert_eq!(
        notifier.notifications(),
        vec![Notification::success("Kategori berhasil ditambahkan")]
    );
    assert_eq!(store.mutation_state(), MutationState::Idle);
}


#[tokio::test]
async fn invalid_drafts_never_reach_the_server() {
    let backend = prepare_mock_backend().await;
    let (store, notifier) = backend.store(Arc::new(ConfirmationOutcome::Confirmed));

    let error = store
        .create(&CategoryDraft::new("   ", "Genangan air"))
        .await
        .unwrap_err();
    assert!(matches!(
        error,
        CategoryStoreError::Validation {
            error: DraftValidationError::MissingName
        }
    ));

    let error = store
        .create(&CategoryDraft::new("Banjir", ""))
        .await
        .unwrap_err();
    assert!(matches!(
        error,
        CategoryStoreError::Validation {
            error: DraftValidationError::MissingDescription
        }
    ));

    assert!(backend.recorded_requests().is_empty());

    assert_eq!(
        notifier.last(),
        Some(Notification::error(
            "Gagal menambahkan kategori: category description is required"
        ))
    );
}


#[tokio::test]
async fn failed_creation_keeps_the_form_open_for_a_retry() {
    let backend = prepare_mock_backend().await;
    seed_sample_categories(&backend, &[SampleCategory::JalanRusak]);

    let (store, notifier) = backend.store(Arc::new(ConfirmationOutcome::Confirmed));
    store.load().await.unwrap();
    let categories_before = store.categories();

    let mut form = CategoryForm::open_for_creation();
    if let Some(draft) = form.draft_mut() {
        *draft = SampleCategory::Sampah.draft();
    }

    backend.fail_next(MockOperation::Create, StatusCode::INTERNAL_SERVER_ERROR);

    let error = form.submit(&store).await.unwrap_err();
    assert!(!error.change_was_applied());

    assert!(form.is_open());
    assert_eq!(form.draft(), Some(&SampleCategory::Sampah.draft()));
    assert_eq!(store.categories(), categories_before);

    // No reload after a failed write.
    assert_eq!(backend.request_count(MockOperation::List), 1);

    let notification = notifier.last().unwrap();
    assert_eq!(notification.kind, NotificationKind::Error);
    assert!(notification
        .message
        .starts_with("Gagal menambahkan kategori: "));


    form.submit(&store).await.unwrap();

    assert!(!form.is_open());
    assert_eq!(category_ids(&store.categories()), vec![1, 2]);
    assert_eq!(
        notifier.last(),
        Some(Notification::success("Kategori berhasil ditambahkan"))
    );
}


#[tokio::test]
async fn rejected_edit_keeps_the_form_open_with_the_edited_values() {
    let backend = prepare_mock_backend().await;
    seed_sample_categories(
        &backend,
        &[SampleCategory::JalanRusak, SampleCategory::Banjir],
    );

    let (store, notifier) = backend.store(Arc::new(ConfirmationOutcome::Confirmed));
    store.load().await.unwrap();
    let categories_before = store.categories();

    let banjir = store.get(CategoryId::new(2)).unwrap();
    let mut form = CategoryForm::open_for_editing(&banjir);
    if let Some(draft) = form.draft_mut() {
        draft.name = "Banjir Rob".to_string();
        draft.description = "Air laut masuk ke permukiman".to_string();
    }

    backend.fail_next(MockOperation::Update, StatusCode::INTERNAL_SERVER_ERROR);

    let error = form.submit(&store).await.unwrap_err();
    assert!(!error.change_was_applied());
    assert!(matches!(
        error,
        CategoryStoreError::RemoteRejection {
            status_code: StatusCode::INTERNAL_SERVER_ERROR,
            ..
        }
    ));

    assert!(form.is_open());
    assert_eq!(
        form.draft(),
        Some(&CategoryDraft::new(
            "Banjir Rob",
            "Air laut masuk ke permukiman"
        ))
    );

    assert_eq!(store.categories(), categories_before);
    assert_eq!(backend.categories()[1].name, "Banjir");

    // No reload after a failed write.
    assert_eq!(backend.request_count(MockOperation::Update), 1);
    assert_eq!(backend.request_count(MockOperation::List), 1);

    let notification = notifier.last().unwrap();
    assert_eq!(notification.kind, NotificationKind::Error);
    assert!(notification
        .message
        .starts_with("Gagal memperbarui kategori: "));
    assert!(notification.message.contains("injected failure"));
}


#[tokio::test]
async fn failed_reload_after_a_saved_change_closes_the_form() {
    let backend = prepare_mock_backend().await;
    seed_sample_categories(&backend, &[SampleCategory::JalanRusak]);

    let (store, notifier) = backend.store(Arc::new(ConfirmationOutcome::Confirmed));
    store.load().await.unwrap();

    let mut form = CategoryForm::open_for_creation();
    if let Some(draft) = form.draft_mut() {
        *draft = SampleCategory::Banjir.draft();
    }

    backend.fail_next(MockOperation::List, StatusCode::SERVICE_UNAVAILABLE);

    let error = form.submit(&store).await.unwrap_err();
    assert!(error.change_was_applied());
    assert!(matches!(
        error,
        CategoryStoreError::ReconciliationFailed { .. }
    ));

    assert!(!form.is_open());
    assert_eq!(backend.categories().len(), 2);
    assert_eq!(category_ids(&store.categories()), vec![1]);

    let notifications = notifier.notifications();
    assert_eq!(notifications.len(), 2);
    assert_eq!(
        notifications[0],
        Notification::success("Kategori berhasil ditambahkan")
    );
    assert_eq!(notifications[1].kind, NotificationKind::Error);


    store.load().await.unwrap();
    assert_eq!(category_ids(&store.categories()), vec![1, 2]);
}


#[tokio::test]
async fn editing_replaces_the_category_in_place() {
    let backend = prepare_mock_backend().await;
    seed_sample_categories(
        &backend,
        &[
            SampleCategory::JalanRusak,
            SampleCategory::Banjir,
            SampleCategory::Sampah,
        ],
    );

    let (store, notifier) = backend.store(Arc::new(ConfirmationOutcome::Confirmed));
    store.load().await.unwrap();

    let banjir = store.get(CategoryId::new(2)).unwrap();
    let mut form = CategoryForm::open_for_editing(&banjir);
    if let Some(draft) = form.draft_mut() {
        draft.name = "Banjir Rob".to_string();
    }

    form.submit(&store).await.unwrap();
    assert!(!form.is_open());

    let categories = store.categories();
    assert_eq!(category_ids(&categories), vec![1, 2, 3]);
    assert_eq!(categories[1].name, "Banjir Rob");
    assert_eq!(categories[1].description, banjir.description);
    assert_eq!(categories[0].name, "Jalan Rusak");
    assert_eq!(categories[2].name, "Sampah");

    assert_eq!(
        notifier.notifications(),
        vec![Notification::success("Kategori berhasil diperbarui")]
    );
}


#[tokio::test]
async fn editing_an_unknown_category_sends_nothing() {
    let backend = prepare_mock_backend().await;
    seed_sample_categories(&backend, &[SampleCategory::JalanRusak]);

    let (store, _notifier) = backend.store(Arc::new(ConfirmationOutcome::Confirmed));
    store.load().await.unwrap();

    let error = store
        .update(CategoryId::new(99), &SampleCategory::Banjir.draft())
        .await
        .unwrap_err();

    assert!(matches!(
        error,
        CategoryStoreError::UnknownCategory { category_id } if category_id == CategoryId::new(99)
    ));
    assert_eq!(backend.request_count(MockOperation::Update), 0);
}


#[tokio::test]
async fn confirmed_removal_drops_exactly_one_category() {
    let backend = prepare_mock_backend().await;
    seed_sample_categories(
        &backend,
        &[
            SampleCategory::JalanRusak,
            SampleCategory::Banjir,
            SampleCategory::Sampah,
        ],
    );

    let confirmation = Arc::new(RecordingConfirmation::new(
        ConfirmationOutcome::Confirmed,
    ));
    let (store, notifier) = backend.store(confirmation.clone());
    store.load().await.unwrap();

    let outcome = store.remove(CategoryId::new(2)).await.unwrap();
    assert_eq!(outcome, RemovalOutcome::Removed);

    assert_eq!(
        confirmation.prompts(),
        vec![(CategoryId::new(2), Some("Banjir".to_string()))]
    );

    assert_eq!(category_ids(&store.categories()), vec![1, 3]);
    assert_eq!(category_ids(&backend.categories()), vec![1, 3]);

    // Deletion updates the mirror locally instead of reloading.
    assert_eq!(backend.request_count(MockOperation::Delete), 1);
    assert_eq!(backend.request_count(MockOperation::List), 1);

    assert_eq!(
        notifier.last(),
        Some(Notification::success("Kategori berhasil dihapus"))
    );
}


#[tokio::test]
async fn unconfirmed_removal_sends_nothing() {
    let backend = prepare_mock_backend().await;
    seed_sample_categories(
        &backend,
        &[SampleCategory::JalanRusak, SampleCategory::Banjir],
    );

    for outcome in [ConfirmationOutcome::Cancelled, ConfirmationOutcome::Dismissed] {
        let (store, notifier) = backend.store(Arc::new(outcome));
        store.load().await.unwrap();

        let removal = store.remove(CategoryId::new(1)).await.unwrap();
        assert_eq!(removal, RemovalOutcome::Declined);

        assert_eq!(category_ids(&store.categories()), vec![1, 2]);
        assert_eq!(
            notifier.last(),
            Some(Notification::info("Kategori tidak jadi dihapus"))
        );
    }

    assert_eq!(backend.request_count(MockOperation::Delete), 0);
    assert_eq!(backend.categories().len(), 2);
}


#[tokio::test]
async fn failed_removal_keeps_the_category() {
    let backend = prepare_mock_backend().await;
    seed_sample_categories(
        &backend,
        &[SampleCategory::JalanRusak, SampleCategory::Banjir],
    );

    let (store, notifier) = backend.store(Arc::new(ConfirmationOutcome::Confirmed));
    store.load().await.unwrap();

    backend.fail_next(MockOperation::Delete, StatusCode::FORBIDDEN);

    let error = store.remove(CategoryId::new(1)).await.unwrap_err();
    assert!(matches!(
        error,
        CategoryStoreError::RemoteRejection {
            status_code: StatusCode::FORBIDDEN,
            ..
        }
    ));

    assert_eq!(category_ids(&store.categories()), vec![1, 2]);
    assert_eq!(backend.categories().len(), 2);

    let notification = notifier.last().unwrap();
    assert_eq!(notification.kind, NotificationKind::Error);
    assert!(notification
        .message
        .starts_with("Gagal menghapus kategori: "));
}


#[tokio::test]
async fn overlapping_mutations_are_rejected() {
    let backend = prepare_mock_backend().await;
    seed_sample_categories(&backend, &[SampleCategory::JalanRusak]);

    let (store, _notifier) = backend.store(Arc::new(ConfirmationOutcome::Confirmed));
    store.load().await.unwrap();

    backend.delay_responses(MockOperation::Create, Duration::from_millis(300));

    let banjir_draft = SampleCategory::Banjir.draft();

    // `join!` polls the creation first, so it is already in flight
    // when the removal is attempted.
    let (creation_result, (state_during_creation, removal_result)) = tokio::join!(
        store.create(&banjir_draft),
        async {
            let state = store.mutation_state();
            (state, store.remove(CategoryId::new(1)).await)
        }
    );

    creation_result.unwrap();
    assert_eq!(state_during_creation, MutationState::Submitting);
    assert!(matches!(
        removal_result,
        Err(CategoryStoreError::MutationInProgress)
    ));

    assert_eq!(store.mutation_state(), MutationState::Idle);
    assert_eq!(backend.request_count(MockOperation::Delete), 0);
    assert_eq!(category_ids(&store.categories()), vec![1, 2]);
}


#[tokio::test]
async fn loading_waits_for_an_in_flight_mutation() {
    let backend = prepare_mock_backend().await;

    let (store, _notifier) = backend.store(Arc::new(ConfirmationOutcome::Confirmed));

    backend.delay_responses(MockOperation::Create, Duration::from_millis(200));

    let sampah_draft = SampleCategory::Sampah.draft();

    let (creation_result, load_result) =
        tokio::join!(store.create(&sampah_draft), store.load());

    creation_result.unwrap();
    load_result.unwrap();

    assert_eq!(category_ids(&store.categories()), vec![1]);
    assert_eq!(backend.request_count(MockOperation::List), 2);
}


#[tokio::test]
async fn mutation_during_a_slow_load_is_not_rejected() {
    let backend = prepare_mock_backend().await;
    seed_sample_categories(&backend, &[SampleCategory::JalanRusak]);

    let (store, notifier) = backend.store(Arc::new(ConfirmationOutcome::Confirmed));

    backend.delay_responses(MockOperation::List, Duration::from_millis(300));

    let banjir_draft = SampleCategory::Banjir.draft();

    let (load_result, (state_during_load, creation_result)) = tokio::join!(
        store.load(),
        async {
            tokio::time::sleep(Duration::from_millis(50)).await;

            let state = store.mutation_state();
            (state, store.create(&banjir_draft).await)
        }
    );

    load_result.unwrap();
    assert_eq!(state_during_load, MutationState::Idle);
    creation_result.unwrap();

    assert_eq!(backend.request_count(MockOperation::Create), 1);
    assert_eq!(backend.request_count(MockOperation::List), 2);

    // The creation's reload runs after the initial load, so the new category is mirrored.
    assert_eq!(category_ids(&store.categories()), vec![1, 2]);
    assert_eq!(store.mutation_state(), MutationState::Idle);

    assert_eq!(
        notifier.notifications(),
        vec![Notification::success("Kategori berhasil ditambahkan")]
    );
}


#[tokio::test]
async fn keyword_filter_matches_names_and_descriptions() {
    let backend = prepare_mock_backend().await;
    seed_sample_categories(
        &backend,
        &[
            SampleCategory::JalanRusak,
            SampleCategory::Banjir,
            SampleCategory::Sampah,
        ],
    );

    let (store, _notifier) = backend.store(Arc::new(ConfirmationOutcome::Confirmed));
    store.load().await.unwrap();

    let by_name = store.filter("jalan");
    assert_eq!(category_ids(&by_name), vec![1]);

    let by_description = store.filter("sungai");
    assert_eq!(category_ids(&by_description), vec![3]);

    assert_eq!(category_ids(&store.filter("BANJIR")), vec![2]);
    assert_eq!(category_ids(&store.filter("")), vec![1, 2, 3]);
    assert!(store.filter("listrik").is_empty());

    // Filtering is a view; the mirror is untouched.
    assert_eq!(store.categories().len(), 3);
}
