/*  Copyright 2022-23, Juspay India Pvt Ltd
    This program is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License
    as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version. This program
    is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
    or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details. You should have received a copy of
    the GNU Affero General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
*/


use crate::{common::types::Params, tools::encode::canonical_entries};

/// Reserved parameter name carrying the request signature.
pub const SIGNATURE_KEY: &str = "sig";

/// The string that gets digested: canonical `key=value` pairs concatenated
/// without separators, followed by the secret.
pub fn signature_base(params: &Params, security_key: &str) -> String {
    let mut base = canonical_entries(params)
        .into_iter()
        .fold(String::new(), |mut acc, (key, value)| {
            acc.push_str(key);
            acc.push('=');
            acc.push_str(value);
            acc
        });
    base.push_str(security_key);
    base
}

/// Uppercase hex MD5 of [`signature_base`].
pub fn sign(params: &Params, security_key: &str) -> String {
    let digest = md5::compute(signature_base(params, security_key).as_bytes());
    format!("{:x}", digest).to_uppercase()
}
