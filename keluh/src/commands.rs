use keluh_core::api_models::Category;
use keluh_store::{CategoryForm, CategoryStore, CategoryStoreError, RemovalOutcome};
use tracing::debug;

use crate::cli::CliCommand;


/// Runs a subcommand against an already loaded store.
///
/// Outcomes are reported to the user by the store's notifier;
/// only `list` writes to stdout.
pub async fn run_command(store: &CategoryStore, command: CliCommand) -> Result<(), CategoryStoreError> {
    match command {
        CliCommand::List { search } => {
            let categories = match search.as_deref() {
                Some(keyword) => store.filter(keyword),
                None => store.categories().to_vec(),
            };

            print!("{}", format_category_listing(&categories));
        }
        CliCommand::Create { name, description } => {
            let mut form = CategoryForm::open_for_creation();
            if let Some(draft) = form.draft_mut() {
                draft.name = name;
                draft.description = description;
            }

            form.submit(store).await?;
        }
        CliCommand::Update {
            id,
            name,
            description,
        } => {
            let category = store
                .get(id)
                .ok_or(CategoryStoreError::UnknownCategory { category_id: id })?;

            let mut form = CategoryForm::open_for_editing(&category);
            if let Some(draft) = form.draft_mut() {
                if let Some(name) = name {
                    draft.name = name;
                }
                if let Some(description) = description {
                    draft.description = description;
                }
            }

            form.submit(store).await?;
        }
        CliCommand::Delete { id, .. } => {
            let outcome = store.remove(id).await?;

            if outcome == RemovalOutcome::Declined {
                debug!(category_id = %id, "Deletion declined, nothing was sent.");
            }
        }
    }

    Ok(())
}


/// One category per line: id, name and description in aligned columns.
pub fn format_category_listing(categories: &[Category]) -> String {
    if categories.is_empty() {
        return "Tidak ada kategori.\n".to_string();
    }

    let id_width = categories
        .iter()
        .map(|category| category.id.to_string().len())
        .max()
        .unwrap_or(0);

    let name_width = categories
        .iter()
        .map(|category| category.name.chars().count())
        .max()
        .unwrap_or(0);

    let mut listing = String::new();
    for category in categories {
        listing.push_str(&format!(
            "{:>id_width$}  {:<name_width$}  {}\n",
            category.id.to_string(),
            category.name,
            category.description,
        ));
    }

    listing
}
