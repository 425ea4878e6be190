use crate::config::Config;
use crate::options::SortMode;
use crate::stats::FrequencyEntry;
use hashbrown::HashMap;

/// Turn the frequency mapping into the ordered entry sequence of the
/// final report: sort, drop entries outside the configured character
/// class, then apply the `top` limit.
#[must_use]
pub fn build_entries(frequencies: HashMap<char, usize>, config: &Config) -> Vec<FrequencyEntry> {
    let mut entries: Vec<FrequencyEntry> = frequencies
        .into_iter()
        .map(|(character, count)| FrequencyEntry { character, count })
        .collect();

    sort_entries(&mut entries, config.sort, config.reverse);
    entries.retain(|entry| config.char_class.includes(entry.character));
    if let Some(n) = config.top {
        entries.truncate(n);
    }

    entries
}

/// Descending is the natural direction for counts, ascending for code
/// points; `reverse` inverts whichever applies.
fn sort_entries(entries: &mut [FrequencyEntry], sort: SortMode, reverse: bool) {
    let descending = match sort {
        SortMode::ByCount => !reverse,
        SortMode::ByCodepoint => reverse,
    };

    entries.sort_by(|a, b| {
        let order = match sort {
            SortMode::ByCount => a.count.cmp(&b.count),
            SortMode::ByCodepoint => a.character.cmp(&b.character),
        };
        if descending { order.reverse() } else { order }
    });
}
