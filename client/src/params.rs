// To the extent possible under law, the author(s) have dedicated all
// copyright and related and neighboring rights to this software to
// the public domain worldwide. This software is distributed without
// any warranty.
//
// You should have received a copy of the CC0 Public Domain Dedication
// along with this software.
// If not, see <http://creativecommons.org/publicdomain/zero/1.0/>.
//

//! Positional-argument handling for calls with trailing optional
//! parameters.

use crate::{Error, Result};

/// One positional argument slot as supplied by a caller: either a value
/// to send or an omitted trailing optional. `Absent` is a marker, not a
/// value; an argument that should reach the daemon as JSON `null` is
/// `Arg::Value(Value::Null)`.
#[derive(Clone, Debug, PartialEq)]
pub enum Arg {
    /// A provided argument value.
    Value(serde_json::Value),
    /// An omitted optional argument.
    Absent,
}

/// Shorthand for converting a variable into a present argument.
pub fn arg<T>(val: T) -> Result<Arg>
where
    T: serde::ser::Serialize,
{
    Ok(Arg::Value(serde_json::to_value(val)?))
}

/// Shorthand for converting an Option into an argument slot, mapping
/// `None` to the absent marker.
pub fn opt_arg<T>(opt: Option<T>) -> Result<Arg>
where
    T: serde::ser::Serialize,
{
    match opt {
        Some(val) => arg(val),
        None => Ok(Arg::Absent),
    }
}

/// Build the parameter array actually sent on the wire.
///
/// A procedure declares `declared_count` positional slots of which a
/// contiguous suffix is optional. A caller may omit a suffix of the
/// optional slots, but may not provide a value after an omitted one:
/// positional JSON-RPC has no way to address a parameter across a gap,
/// so that ordering fails with [Error::ArgumentOrder].
///
/// Returns the values before the first absent marker, unchanged and in
/// order. With no absent markers the full list is returned as-is.
pub fn normalize_params(
    declared_count: usize,
    args: Vec<Arg>,
) -> Result<Vec<serde_json::Value>> {
    debug_assert!(args.len() <= declared_count);

    let first_absent = match args.iter().position(|a| *a == Arg::Absent) {
        Some(k) => k,
        None => {
            return Ok(args
                .into_iter()
                .map(|a| match a {
                    Arg::Value(v) => v,
                    Arg::Absent => unreachable!(),
                })
                .collect());
        }
    };

    for (offset, a) in args[first_absent + 1..].iter().enumerate() {
        if let Arg::Value(_) = a {
            return Err(Error::ArgumentOrder {
                absent: first_absent,
                present: first_absent + 1 + offset,
            });
        }
    }

    let mut out = Vec::with_capacity(first_absent);
    for a in args.into_iter().take(first_absent) {
        if let Arg::Value(v) = a {
            out.push(v);
        }
    }
    Ok(out)
}
