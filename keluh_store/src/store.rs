use std::{
    collections::HashSet,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
};

use arc_swap::ArcSwap;
use keluh_api_client::AuthenticatedClient;
use keluh_core::{
    api_models::Category,
    draft::CategoryDraft,
    filter::filter_categories,
    ids::CategoryId,
};
use tokio::sync::{Mutex, MutexGuard};
use tracing::{info, warn};

use crate::{
    collaborators::{ConfirmDeletion, Notification, Notifier},
    errors::CategoryStoreError,
};


const CATEGORY_CREATED_MESSAGE: &str = "Kategori berhasil ditambahkan";
const CATEGORY_UPDATED_MESSAGE: &str = "Kategori berhasil diperbarui";
const CATEGORY_DELETED_MESSAGE: &str = "Kategori berhasil dihapus";
const CATEGORY_DELETION_DECLINED_MESSAGE: &str = "Kategori tidak jadi dihapus";


#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MutationState {
    Idle,
    Submitting,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RemovalOutcome {
    Removed,

    /// The user did not confirm; nothing was sent to the server.
    Declined,
}


#[derive(Clone, Copy)]
enum Operation {
    Load,
    Create,
    Update,
    Remove,
}

impl Operation {
    fn failure_prefix(self) -> &'static str {
        match self {
            Operation::Load => "Gagal memuat kategori",
            Operation::Create => "Gagal menambahkan kategori",
            Operation::Update => "Gagal memperbarui kategori",
            Operation::Remove => "Gagal menghapus kategori",
        }
    }
}


/// Held for the duration of a mutation; flips the store back to [`MutationState::Idle`]
/// when dropped, whichever way the mutation ended.
struct MutationGuard<'s> {
    _mutation_lock: MutexGuard<'s, ()>,
    submitting: &'s AtomicBool,
}

impl Drop for MutationGuard<'_> {
    fn drop(&mut self) {
        self.submitting.store(false, Ordering::Release);
    }
}



/// Client-side mirror of the backend's category collection.
///
/// The mirror reflects the server as of the last successful load or mutation
/// and is never written on a failure path. Reads ([`Self::categories`], [`Self::filter`], ...)
/// are synchronous snapshots and never wait on the network.
///
/// At most one mutation (create, update or remove) is in flight at a time;
/// overlapping ones are rejected with [`CategoryStoreError::MutationInProgress`].
/// [`Self::load`] waits for an in-flight mutation instead of being rejected,
/// and a mutation started during a load waits for it before touching the mirror.
pub struct CategoryStore {
    client: AuthenticatedClient,

    confirmation: Arc<dyn ConfirmDeletion>,

    notifier: Arc<dyn Notifier>,

    mirror: ArcSwap<Vec<Category>>,

    /// Held by the single in-flight mutation.
    mutation_lock: Mutex<()>,

    /// Held while the mirror is being fetched and replaced.
    mirror_lock: Mutex<()>,

    submitting: AtomicBool,
}

impl CategoryStore {
    /// Creates a store with an empty mirror. Call [`Self::load`] to populate it.
    pub fn new(
        client: AuthenticatedClient,
        confirmation: Arc<dyn ConfirmDeletion>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            client,
            confirmation,
            notifier,
            mirror: ArcSwap::from_pointee(Vec::new()),
            mutation_lock: Mutex::new(()),
            mirror_lock: Mutex::new(()),
            submitting: AtomicBool::new(false),
        }
    }

    /// Snapshot of the whole mirror, in server order.
    pub fn categories(&self) -> Arc<Vec<Category>> {
        self.mirror.load_full()
    }

    pub fn get(&self, category_id: CategoryId) -> Option<Category> {
        self.mirror
            .load()
            .iter()
            .find(|category| category.id == category_id)
            .cloned()
    }

    /// Categories whose name or description contains `keyword` (case-insensitive),
    /// in mirror order. An empty keyword returns every category.
    pub fn filter(&self, keyword: &str) -> Vec<Category> {
        filter_categories(self.mirror.load().iter(), keyword)
    }

    pub fn mutation_state(&self) -> MutationState {
        if self.submitting.load(Ordering::Acquire) {
            MutationState::Submitting
        } else {
            MutationState::Idle
        }
    }


    /// Fetches the full collection and replaces the mirror with it.
    ///
    /// On failure the previous mirror stays in place.
    pub async fn load(&self) -> Result<(), CategoryStoreError> {
        // Only waits for an in-flight mutation to finish; mutations issued
        // after this point are not blocked by the load.
        drop(self.mutation_lock.lock().await);

        self.reload()
            .await
            .map_err(|error| self.report_failure(Operation::Load, error))
    }

    /// Creates a category from `draft`, then reloads the mirror.
    ///
    /// The draft is only borrowed; on failure it's still there to be resubmitted.
    pub async fn create(&self, draft: &CategoryDraft) -> Result<(), CategoryStoreError> {
        self.try_create(draft)
            .await
            .map_err(|error| self.report_failure(Operation::Create, error))
    }

    /// Replaces the name and description of an already loaded category, then reloads the mirror.
    pub async fn update(
        &self,
        category_id: CategoryId,
        draft: &CategoryDraft,
    ) -> Result<(), CategoryStoreError> {
        self.try_update(category_id, draft)
            .await
            .map_err(|error| self.report_failure(Operation::Update, error))
    }

    /// Asks for confirmation, deletes the category and drops it from the mirror.
    ///
    /// A declined confirmation sends nothing and leaves the mirror as it was.
    pub async fn remove(&self, category_id: CategoryId) -> Result<RemovalOutcome, CategoryStoreError> {
        self.try_remove(category_id)
            .await
            .map_err(|error| self.report_failure(Operation::Remove, error))
    }



    async fn try_create(&self, draft: &CategoryDraft) -> Result<(), CategoryStoreError> {
        draft.validate()?;

        let _guard = self.begin_mutation()?;

        self.client.categories().create_category(draft).await?;

        info!(name = draft.name.as_str(), "Category created.");
        self.notifier
            .notify(Notification::success(CATEGORY_CREATED_MESSAGE));

        self.reload()
            .await
            .map_err(CategoryStoreError::reconciliation_failed)
    }

    async fn try_update(
        &self,
        category_id: CategoryId,
        draft: &CategoryDraft,
    ) -> Result<(), CategoryStoreError> {
        draft.validate()?;

        if self.get(category_id).is_none() {
            return Err(CategoryStoreError::UnknownCategory { category_id });
        }

        let _guard = self.begin_mutation()?;

        self.client
            .categories()
            .update_category(category_id, draft)
            .await?;

        info!(category_id = %category_id, "Category updated.");
        self.notifier
            .notify(Notification::success(CATEGORY_UPDATED_MESSAGE));

        self.reload()
            .await
            .map_err(CategoryStoreError::reconciliation_failed)
    }

    async fn try_remove(&self, category_id: CategoryId) -> Result<RemovalOutcome, CategoryStoreError> {
        let _guard = self.begin_mutation()?;

        let category_name = self.get(category_id).map(|category| category.name);

        let confirmation = self
            .confirmation
            .confirm_deletion(category_id, category_name.as_deref())
            .await;

        if !confirmation.is_confirmed() {
            info!(
                category_id = %category_id,
                outcome = ?confirmation,
                "Category deletion was not confirmed."
            );
            self.notifier
                .notify(Notification::info(CATEGORY_DELETION_DECLINED_MESSAGE));

            return Ok(RemovalOutcome::Declined);
        }

        self.client
            .categories()
            .delete_category(category_id)
            .await?;

        // Deletion has no server-computed fields to reconcile, so the entry is dropped locally.
        let _mirror_lock = self.mirror_lock.lock().await;
        let remaining_categories: Vec<Category> = self
            .mirror
            .load()
            .iter()
            .filter(|category| category.id != category_id)
            .cloned()
            .collect();
        self.mirror.store(Arc::new(remaining_categories));

        info!(category_id = %category_id, "Category deleted.");
        self.notifier
            .notify(Notification::success(CATEGORY_DELETED_MESSAGE));

        Ok(RemovalOutcome::Removed)
    }


    /// Fetches the collection and swaps it in.
    async fn reload(&self) -> Result<(), CategoryStoreError> {
        let _mirror_lock = self.mirror_lock.lock().await;

        let categories = self.client.categories().get_categories().await?;

        let categories = deduplicate_by_id(categories);
        let category_count = categories.len();

        self.mirror.store(Arc::new(categories));

        info!(category_count, "Category list loaded.");

        Ok(())
    }

    fn begin_mutation(&self) -> Result<MutationGuard<'_>, CategoryStoreError> {
        let mutation_lock = self
            .mutation_lock
            .try_lock()
            .map_err(|_| CategoryStoreError::MutationInProgress)?;

        self.submitting.store(true, Ordering::Release);

        Ok(MutationGuard {
            _mutation_lock: mutation_lock,
            submitting: &self.submitting,
        })
    }

    fn report_failure(&self, operation: Operation, error: CategoryStoreError) -> CategoryStoreError {
        warn!(error = %error, "{}.", operation.failure_prefix());

        self.notifier.notify(Notification::error(format!(
            "{}: {}",
            operation.failure_prefix(),
            error
        )));

        error
    }
}


/// Keeps the first occurrence of every id.
fn deduplicate_by_id(categories: Vec<Category>) -> Vec<Category> {
    let mut seen_ids = HashSet::with_capacity(categories.len());
    let total_count = categories.len();

    let unique_categories: Vec<Category> = categories
        .into_iter()
        .filter(|category| seen_ids.insert(category.id))
        .collect();

    if unique_categories.len() != total_count {
        warn!(
            duplicate_count = total_count - unique_categories.len(),
            "Server returned duplicate category ids, keeping the first of each."
        );
    }

    unique_categories
}



#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn duplicate_ids_keep_first_occurrence() {
        let categories = vec![
            Category::new(CategoryId::new(1), "Jalan Rusak", "Jalan berlubang"),
            Category::new(CategoryId::new(2), "Banjir", "Genangan air"),
            Category::new(CategoryId::new(1), "Duplikat", "Tidak dipakai"),
        ];

        let unique_categories = deduplicate_by_id(categories);

        assert_eq!(unique_categories.len(), 2);
        assert_eq!(unique_categories[0].name, "Jalan Rusak");
        assert_eq!(unique_categories[1].name, "Banjir");
    }
}
