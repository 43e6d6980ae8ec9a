//! Type-safe DNS record types.

use strum_macros::IntoStaticStr;

/// Possible types a DNS record can have.
///
/// Rendered to the wire as its uppercase name, e.g. [`Type::Aaaa`] becomes
/// `"AAAA"` in a record body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Type {
    A,
    Aaaa,
    Alias,
    Cname,
    Hinfo,
    Mx,
    Naptr,
    Ns,
    Pool,
    Ptr,
    Spf,
    Srv,
    Sshfp,
    Txt,
    Url,
}

impl Type {
    /// Gets the string representation of the type.
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}
