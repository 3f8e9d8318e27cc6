// URL templates for the Riot API. `{location}` names the regional shard and
// shows up both in the host and in most paths, so the base prefix stays a
// template too and gets filled in the same pass as the rest of the URL.

use crate::error::ApiError;

pub(crate) const BASE_URL: &str = "https://{location}.api.pvp.net/";

const URLS: &[(&str, &str)] = &[
    ("ids", "api/lol/{location}/v1.4/summoner/by-name/{players}"),
    (
        "stats",
        "api/lol/{location}/v1.3/stats/by-summoner/{player}/ranked/",
    ),
    (
        "champion",
        "api/lol/static-data/{location}/v1.2/champion/{champion}/",
    ),
    ("featured", "observer-mode/rest/featured/"),
    ("matches", "api/lol/{location}/v2.2/matchhistory/{player}/"),
    ("match", "api/lol/{location}/v2.2/match/{match}/"),
    (
        "match_list",
        "api/lol/{location}/v2.2/matchlist/by-summoner/{player}/",
    ),
];

pub(crate) fn url_template(operation: &str) -> Option<&'static str> {
    URLS.iter()
        .find(|(name, _)| *name == operation)
        .map(|(_, template)| *template)
}

/// Substitutes every `{placeholder}` in `template` by exact name match.
///
/// Values without a matching placeholder are ignored; a placeholder without a
/// matching value is an error.
pub(crate) fn fill(
    operation: &str,
    template: &str,
    values: &[(&str, &str)],
) -> Result<String, ApiError> {
    let mut resolved = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        let (literal, tail) = rest.split_at(open);
        resolved.push_str(literal);

        let close = tail.find('}').ok_or_else(|| ApiError::MalformedTemplate {
            operation: operation.to_string(),
            reason: "unterminated `{` placeholder".to_string(),
        })?;
        let name = &tail[1..close];

        let value = values
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|(_, value)| *value)
            .ok_or_else(|| ApiError::MissingPlaceholder {
                operation: operation.to_string(),
                placeholder: name.to_string(),
            })?;

        resolved.push_str(value);
        rest = &tail[close + 1..];
    }

    resolved.push_str(rest);
    Ok(resolved)
}
