use crate::api::MovieDetail;
use crate::sanitizer::sanitise;

/// Build the canonical folder name for a movie:
/// `<Title> (<Year>)`, followed by ` {imdb-<id>}` when an IMDB id is known.
///
/// The year is the first four characters of the ISO release date. Details
/// decoded by the TMDB client always carry one; a shorter date is used as-is.
pub fn build_canonical_name(detail: &MovieDetail) -> String {
    let title = sanitise(&detail.title);
    let year = detail.year().unwrap_or(detail.release_date.as_str());

    let mut name = format!("{} ({})", title, year);

    if let Some(imdb_id) = detail.imdb_id.as_deref().filter(|id| !id.is_empty()) {
        name.push_str(&format!(" {{imdb-{}}}", imdb_id));
    }

    name
}
