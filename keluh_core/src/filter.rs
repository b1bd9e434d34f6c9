use crate::api_models::Category;


/// Returns the categories whose name or description contains `keyword`,
/// ignoring case. Relative order is preserved and an empty keyword keeps everything.
pub fn filter_categories<'c, I>(categories: I, keyword: &str) -> Vec<Category>
where
    I: IntoIterator<Item = &'c Category>,
{
    if keyword.is_empty() {
        return categories.into_iter().cloned().collect();
    }

    let lowercase_keyword = keyword.to_lowercase();

    categories
        .into_iter()
        .filter(|category| category_matches(category, &lowercase_keyword))
        .cloned()
        .collect()
}


fn category_matches(category: &Category, lowercase_keyword: &str) -> bool {
    category.name.to_lowercase().contains(lowercase_keyword)
        || category
            .description
            .to_lowercase()
            .contains(lowercase_keyword)
}
