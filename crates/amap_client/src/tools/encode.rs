/*  Copyright 2022-23, Juspay India Pvt Ltd
    This program is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License
    as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version. This program
    is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
    or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details. You should have received a copy of
    the GNU Affero General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
*/


use crate::common::types::Params;
use itertools::Itertools;
use url::form_urlencoded;

/// Key ordering applied when serializing a parameter set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOrder {
    /// Keys sorted byte-wise ascending. Required wherever a signature is involved.
    Canonical,
    /// Whatever order the map yields. Not reproducible.
    Unordered,
}

/// Form-style query escaping: space becomes `+`, everything outside
/// `[A-Za-z0-9*-._]` becomes uppercase `%XX` over UTF-8 bytes.
pub fn query_escape(input: &str) -> String {
    form_urlencoded::byte_serialize(input.as_bytes()).collect()
}

/// Non-empty entries in canonical (byte-wise ascending key) order.
pub fn canonical_entries(params: &Params) -> Vec<(&str, &str)> {
    params
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, value)| (key.as_str(), value.as_str()))
        .sorted_unstable_by_key(|(key, _)| *key)
        .collect()
}

pub fn encode_params(params: &Params, order: KeyOrder) -> String {
    match order {
        KeyOrder::Canonical => canonical_entries(params)
            .into_iter()
            .map(|(key, value)| format!("{}={}", query_escape(key), query_escape(value)))
            .join("&"),
        KeyOrder::Unordered => form_urlencoded::Serializer::new(String::new())
            .extend_pairs(params.iter().filter(|(_, value)| !value.is_empty()))
            .finish(),
    }
}

pub fn encode_params_canonical(params: &Params) -> String {
    encode_params(params, KeyOrder::Canonical)
}
