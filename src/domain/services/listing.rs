use crate::domain::entities::file_entry::FileEntry;
use crate::domain::entities::sort::{SortBy, SortOrder, SortPreference};
use std::cmp::Ordering;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Entries whose name contains `query`, ignoring case.
///
/// A blank query keeps everything.
#[must_use]
pub fn filter_entries<'a>(files: &'a [FileEntry], query: &str) -> Vec<&'a FileEntry> {
    if query.trim().is_empty() {
        return files.iter().collect();
    }
    let query = query.to_lowercase();
    files
        .iter()
        .filter(|file| file.name.to_lowercase().contains(&query))
        .collect()
}

/// Stable sort putting every directory before every file, then ordering each
/// group by the chosen key.
pub fn sort_entries(entries: &mut [&FileEntry], sort: SortPreference) {
    entries.sort_by(|a, b| compare(a, b, sort));
}

/// Filtered and sorted projection of a listing, as displayed.
#[must_use]
pub fn visible_files(
    files: &[FileEntry],
    query: &str,
    sort: SortPreference,
    show_hidden: bool,
) -> Vec<FileEntry> {
    let mut entries: Vec<&FileEntry> = filter_entries(files, query)
        .into_iter()
        .filter(|file| show_hidden || !file.is_hidden())
        .collect();
    sort_entries(&mut entries, sort);
    entries.into_iter().cloned().collect()
}

fn compare(a: &FileEntry, b: &FileEntry, sort: SortPreference) -> Ordering {
    match (a.is_directory, b.is_directory) {
        (true, false) => return Ordering::Less,
        (false, true) => return Ordering::Greater,
        _ => {}
    }

    let ordering = match sort.by {
        SortBy::Name => compare_names(&a.name, &b.name),
        SortBy::Date => a
            .modification_time
            .unwrap_or(0)
            .cmp(&b.modification_time.unwrap_or(0)),
        SortBy::Size => a.size.unwrap_or(0).cmp(&b.size.unwrap_or(0)),
        SortBy::Type => compare_names(
            a.extension.as_deref().unwrap_or_default(),
            b.extension.as_deref().unwrap_or_default(),
        ),
    };

    match sort.order {
        SortOrder::Asc => ordering,
        SortOrder::Desc => ordering.reverse(),
    }
}

/// Approximates a root-locale collation: names are compared on their base
/// letters first (case and accents folded), then on accents, then on case.
///
/// Punctuation is not ignored, so `.hidden` sorts before `Alpha.png`.
fn compare_names(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(&base_letters(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| b.cmp(a))
}

fn base_letters(name: &str) -> String {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}
