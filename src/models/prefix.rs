//! IPv4/IPv6 network prefix and CIDR notation utilities.
//!
//! Provides [`Prefix`] for representing a network block in canonical form,
//! along with the mask helpers used by the trie and the subnet splitter.
//! Addresses of both families are held in a `u128`; IPv4 uses the low 32 bits.

use crate::error::{Error, Result};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

/// Maximum prefix length for an IPv4 network (32 bits).
pub const MAX_LENGTH_V4: u8 = 32;

/// Maximum prefix length for an IPv6 network (128 bits).
pub const MAX_LENGTH_V6: u8 = 128;

/// Address family of a [`Prefix`].
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub enum Family {
    Ipv4,
    Ipv6,
}

impl Family {
    /// Address family of an [`IpAddr`].
    pub fn of(addr: &IpAddr) -> Family {
        match addr {
            IpAddr::V4(_) => Family::Ipv4,
            IpAddr::V6(_) => Family::Ipv6,
        }
    }

    /// Bit width of the family, which is also its longest prefix length.
    pub fn max_length(self) -> u8 {
        match self {
            Family::Ipv4 => MAX_LENGTH_V4,
            Family::Ipv6 => MAX_LENGTH_V6,
        }
    }

    fn all_bits(self) -> u128 {
        match self {
            Family::Ipv4 => u32::MAX as u128,
            Family::Ipv6 => u128::MAX,
        }
    }
}

fn check_length(family: Family, len: u8) -> Result<()> {
    if len > family.max_length() {
        Err(Error::LengthTooLong {
            token: format!("/{len}"),
            len: len as u32,
            max: family.max_length(),
        })
    } else {
        Ok(())
    }
}

/// Mask covering the host part of a `len` bit prefix.
///
/// # Examples
/// ```
/// use blockadjust::models::{host_mask, Family};
/// assert_eq!(host_mask(Family::Ipv4, 24).unwrap(), 0xFF);
/// ```
pub fn host_mask(family: Family, len: u8) -> Result<u128> {
    check_length(family, len)?;
    let right_len = (family.max_length() - len) as u32;
    if right_len == 0 {
        Ok(0)
    } else {
        Ok(u128::MAX >> (128 - right_len))
    }
}

/// Convert a CIDR prefix length to a network mask.
///
/// # Examples
/// ```
/// use blockadjust::models::{get_cidr_mask, Family};
/// assert_eq!(get_cidr_mask(Family::Ipv4, 24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(family: Family, len: u8) -> Result<u128> {
    Ok(family.all_bits() & !host_mask(family, len)?)
}

/// Get the network address for the given address bits and prefix length.
pub fn cut_addr(family: Family, bits: u128, len: u8) -> Result<u128> {
    Ok(bits & get_cidr_mask(family, len)?)
}

/// Calculate the last address for the given address bits and prefix length.
pub fn broadcast_addr(family: Family, bits: u128, len: u8) -> Result<u128> {
    Ok(cut_addr(family, bits, len)? | host_mask(family, len)?)
}

/// IP network block in canonical form: host bits beyond `len` are always zero.
///
/// Ordering is by family, then network address, then length, so a block sorts
/// before every block nested inside it.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Prefix {
    family: Family,
    bits: u128,
    len: u8,
}

impl Prefix {
    /// Create a [`Prefix`] from an address and length, clearing any host bits.
    pub fn new(addr: IpAddr, len: u8) -> Result<Prefix> {
        let family = Family::of(&addr);
        let bits = match addr {
            IpAddr::V4(v4) => u32::from(v4) as u128,
            IpAddr::V6(v6) => u128::from(v6),
        };
        Prefix::from_bits(family, bits, len)
    }

    /// Create a [`Prefix`] from raw address bits, clearing any host bits.
    pub fn from_bits(family: Family, bits: u128, len: u8) -> Result<Prefix> {
        let bits = cut_addr(family, bits & family.all_bits(), len)?;
        Ok(Prefix { family, bits, len })
    }

    pub fn family(&self) -> Family {
        self.family
    }

    /// Network address as an integer.
    pub fn bits(&self) -> u128 {
        self.bits
    }

    /// Prefix length.
    pub fn prefix_len(&self) -> u8 {
        self.len
    }

    /// Longest prefix length of this block's family (32 or 128).
    pub fn max_length(&self) -> u8 {
        self.family.max_length()
    }

    /// Value (0 or 1) of the address bit at `depth`, counting from the most
    /// significant bit of the family's width.
    pub fn bit(&self, depth: u8) -> u8 {
        let shift = (self.max_length() - 1 - depth) as u32;
        ((self.bits >> shift) & 1) as u8
    }

    /// Get the lowest (network) address of the block.
    pub fn lo(&self) -> IpAddr {
        self.to_addr(self.bits)
    }

    /// Get the highest (broadcast) address of the block.
    pub fn hi(&self) -> IpAddr {
        // len is validated on construction, so the host mask always exists
        let host = host_mask(self.family, self.len).unwrap_or_default();
        self.to_addr(self.bits | host)
    }

    fn to_addr(&self, bits: u128) -> IpAddr {
        match self.family {
            Family::Ipv4 => IpAddr::V4(Ipv4Addr::from(bits as u32)),
            Family::Ipv6 => IpAddr::V6(Ipv6Addr::from(bits)),
        }
    }

    /// The `/0` block of a family.
    pub fn default_route(family: Family) -> Prefix {
        Prefix {
            family,
            bits: 0,
            len: 0,
        }
    }

    /// The half of this block selected by `bit` (0 for the lower half).
    ///
    /// Callers guarantee the block is shorter than its family maximum.
    pub(crate) fn extend(&self, bit: u8) -> Prefix {
        let shift = (self.max_length() - 1 - self.len) as u32;
        Prefix {
            family: self.family,
            bits: self.bits | ((bit as u128 & 1) << shift),
            len: self.len + 1,
        }
    }

    /// True if `other` is this block or nested inside it.
    pub fn contains(&self, other: &Prefix) -> bool {
        self.family == other.family
            && self.len <= other.len
            && cut_addr(self.family, other.bits, self.len).ok() == Some(self.bits)
    }

    /// True if `other` is nested inside this block and is not the block itself.
    pub fn is_strict_supernet_of(&self, other: &Prefix) -> bool {
        self.len < other.len && self.contains(other)
    }

    /// True if this block is nested inside `other` and is not `other` itself.
    pub fn is_strict_subnet_of(&self, other: &Prefix) -> bool {
        other.is_strict_supernet_of(self)
    }

    /// True if the two blocks share at least one address.
    pub fn overlaps(&self, other: &Prefix) -> bool {
        self.contains(other) || other.contains(self)
    }
}

impl FromStr for Prefix {
    type Err = Error;

    /// Parse `addr/len`, or a bare address as a host block.
    fn from_str(s: &str) -> Result<Prefix> {
        let token = s.trim();
        let (addr_part, len_part) = match token.split_once('/') {
            Some((addr, len)) => (addr, Some(len)),
            None => (token, None),
        };

        let addr: IpAddr = addr_part
            .parse()
            .map_err(|_| Error::InvalidAddress(token.to_string()))?;
        let family = Family::of(&addr);

        let len = match len_part {
            None => family.max_length() as u32,
            Some(len) if !len.is_empty() && len.bytes().all(|b| b.is_ascii_digit()) => len
                .parse::<u32>()
                .map_err(|_| Error::InvalidLength(token.to_string()))?,
            Some(_) => return Err(Error::InvalidLength(token.to_string())),
        };
        if len > family.max_length() as u32 {
            return Err(Error::LengthTooLong {
                token: token.to_string(),
                len,
                max: family.max_length(),
            });
        }

        let prefix = Prefix::new(addr, len as u8)?;
        if prefix.lo() != addr {
            log::debug!("Host bits cleared: {token} -> {prefix}");
        }
        Ok(prefix)
    }
}

impl std::fmt::Display for Prefix {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.lo(), self.len)
    }
}

impl Serialize for Prefix {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Prefix {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Prefix, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Prefix::from_str(&s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(s: &str) -> Prefix {
        s.parse().unwrap()
    }

    #[test]
    fn test_get_cidr_mask() {
        assert_eq!(get_cidr_mask(Family::Ipv4, 0).unwrap(), 0x00000000);
        assert_eq!(get_cidr_mask(Family::Ipv4, 8).unwrap(), 0xFF000000);
        assert_eq!(get_cidr_mask(Family::Ipv4, 24).unwrap(), 0xFFFFFF00);
        assert_eq!(get_cidr_mask(Family::Ipv4, 32).unwrap(), 0xFFFFFFFF);
        assert!(get_cidr_mask(Family::Ipv4, 33).is_err());

        assert_eq!(get_cidr_mask(Family::Ipv6, 0).unwrap(), 0);
        assert_eq!(get_cidr_mask(Family::Ipv6, 128).unwrap(), u128::MAX);
        assert_eq!(get_cidr_mask(Family::Ipv6, 1).unwrap(), 1u128 << 127);
        assert!(get_cidr_mask(Family::Ipv6, 129).is_err());
    }

    #[test]
    fn test_cut_and_broadcast() {
        let ip = u32::from(Ipv4Addr::new(192, 168, 1, 42)) as u128;
        let cut = cut_addr(Family::Ipv4, ip, 24).unwrap();
        assert_eq!(cut, u32::from(Ipv4Addr::new(192, 168, 1, 0)) as u128);
        let bcast = broadcast_addr(Family::Ipv4, ip, 16).unwrap();
        assert_eq!(bcast, u32::from(Ipv4Addr::new(192, 168, 255, 255)) as u128);
        assert_eq!(broadcast_addr(Family::Ipv6, 0, 0).unwrap(), u128::MAX);
    }

    #[test]
    fn test_parse() {
        let v4 = p("1.0.0.0/8");
        assert_eq!(v4.family(), Family::Ipv4);
        assert_eq!(v4.prefix_len(), 8);
        assert_eq!(v4.to_string(), "1.0.0.0/8");

        let v6 = p(" 1::/48 ");
        assert_eq!(v6.family(), Family::Ipv6);
        assert_eq!(v6.prefix_len(), 48);
        assert_eq!(v6.to_string(), "1::/48");
    }

    #[test]
    fn test_parse_host_and_canonical() {
        assert_eq!(p("10.1.2.3").to_string(), "10.1.2.3/32");
        assert_eq!(p("1::1").to_string(), "1::1/128");
        assert_eq!(p("1.2.3.4/8").to_string(), "1.0.0.0/8");
        assert_eq!(p("1.2.3.4/8"), p("1.0.0.0/8"));
        assert_eq!(p("0.0.0.0/0").to_string(), "0.0.0.0/0");
        assert_eq!(p("::/0").to_string(), "::/0");
    }

    #[test]
    fn test_parse_invalid() {
        assert!(matches!(
            "1.0.0.0/33".parse::<Prefix>(),
            Err(Error::LengthTooLong { len: 33, max: 32, .. })
        ));
        assert!(matches!(
            "1::/129".parse::<Prefix>(),
            Err(Error::LengthTooLong { len: 129, max: 128, .. })
        ));
        assert!(matches!(
            "1.0.0.0/300".parse::<Prefix>(),
            Err(Error::LengthTooLong { .. })
        ));
        assert!(matches!(
            "1.0.0/8".parse::<Prefix>(),
            Err(Error::InvalidAddress(_))
        ));
        assert!(matches!(
            "bogus".parse::<Prefix>(),
            Err(Error::InvalidAddress(_))
        ));
        assert!(matches!(
            "1.0.0.0/".parse::<Prefix>(),
            Err(Error::InvalidLength(_))
        ));
        assert!(matches!(
            "1.0.0.0/+8".parse::<Prefix>(),
            Err(Error::InvalidLength(_))
        ));
        assert!(matches!(
            "1.0.0.0/8/9".parse::<Prefix>(),
            Err(Error::InvalidLength(_))
        ));
    }

    #[test]
    fn test_relations() {
        let p8 = p("1.0.0.0/8");
        let p9 = p("1.128.0.0/9");
        let other = p("2.0.0.0/9");

        assert!(p8.contains(&p8));
        assert!(p8.contains(&p9));
        assert!(!p9.contains(&p8));
        assert!(!p8.contains(&other));

        assert!(p8.is_strict_supernet_of(&p9));
        assert!(!p8.is_strict_supernet_of(&p8));
        assert!(p9.is_strict_subnet_of(&p8));
        assert!(p8.overlaps(&p9));
        assert!(!p9.overlaps(&other));

        // same bits, different family
        let v6 = Prefix::from_bits(Family::Ipv6, p8.bits(), 104).unwrap();
        assert!(!p8.contains(&v6));
    }

    #[test]
    fn test_lo_hi() {
        let p8 = p("10.0.0.0/8");
        assert_eq!(p8.lo(), "10.0.0.0".parse::<IpAddr>().unwrap());
        assert_eq!(p8.hi(), "10.255.255.255".parse::<IpAddr>().unwrap());
        let v6 = p("1::/64");
        assert_eq!(v6.hi(), "1::ffff:ffff:ffff:ffff".parse::<IpAddr>().unwrap());
    }

    #[test]
    fn test_bit() {
        let p9 = p("1.128.0.0/9");
        assert_eq!(p9.bit(7), 1);
        assert_eq!(p9.bit(8), 1);
        assert_eq!(p9.bit(0), 0);
        let v6 = p("8000::/1");
        assert_eq!(v6.bit(0), 1);
    }

    #[test]
    fn test_extend() {
        let p8 = p("1.0.0.0/8");
        assert_eq!(p8.extend(0), p("1.0.0.0/9"));
        assert_eq!(p8.extend(1), p("1.128.0.0/9"));
        assert_eq!(Prefix::default_route(Family::Ipv6).extend(1), p("8000::/1"));
    }

    #[test]
    fn test_prefix_cmp() {
        let p8 = p("1.0.0.0/8");
        let p9 = p("1.0.0.0/9");
        let p9_hi = p("1.128.0.0/9");
        let v6 = p("::/0");

        assert!(p8 < p9);
        assert!(p9 < p9_hi);
        assert!(p8 < p9_hi);
        assert!(p9_hi < v6);
    }

    #[test]
    fn test_serde() {
        let prefixes = vec![p("1.0.0.0/9"), p("1:0:0:1::/64")];
        let json = serde_json::to_string(&prefixes).unwrap();
        assert_eq!(json, r#"["1.0.0.0/9","1:0:0:1::/64"]"#);
        let back: Vec<Prefix> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, prefixes);
        assert!(serde_json::from_str::<Prefix>(r#""1.0.0.0/33""#).is_err());
    }
}
