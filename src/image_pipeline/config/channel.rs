//! Channel identifiers and the per-output-channel routing table.

use std::fmt;
use std::str::FromStr;

use crate::image_pipeline::common::error::TransformError;

/// One of the four 8-bit channels of an RGBA image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    R,
    G,
    B,
    A,
}

impl Channel {
    /// Output order used everywhere channels are iterated or merged.
    pub const ALL: [Channel; 4] = [Channel::R, Channel::G, Channel::B, Channel::A];

    /// Position of this channel inside an interleaved RGBA pixel.
    pub const fn index(self) -> usize {
        match self {
            Channel::R => 0,
            Channel::G => 1,
            Channel::B => 2,
            Channel::A => 3,
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Channel::R => f.write_str("R"),
            Channel::G => f.write_str("G"),
            Channel::B => f.write_str("B"),
            Channel::A => f.write_str("A"),
        }
    }
}

impl FromStr for Channel {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "r" | "red" => Ok(Channel::R),
            "g" | "green" => Ok(Channel::G),
            "b" | "blue" => Ok(Channel::B),
            "a" | "alpha" => Ok(Channel::A),
            other => Err(TransformError::InvalidConfig(format!(
                "unknown channel '{}', expected one of R, G, B, A",
                other
            ))),
        }
    }
}

/// Routing table: for each output channel, which source channel feeds it and
/// whether its samples are inverted.
///
/// Sources need not form a permutation; one source may feed several outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelMap {
    sources: [Channel; 4],
    invert: [bool; 4],
}

impl Default for ChannelMap {
    fn default() -> Self {
        Self::identity()
    }
}

impl ChannelMap {
    pub const fn identity() -> Self {
        Self {
            sources: Channel::ALL,
            invert: [false; 4],
        }
    }

    pub const fn new(sources: [Channel; 4], invert: [bool; 4]) -> Self {
        Self { sources, invert }
    }

    pub fn with_source(mut self, output: Channel, source: Channel) -> Self {
        self.sources[output.index()] = source;
        self
    }

    pub fn with_invert(mut self, output: Channel, invert: bool) -> Self {
        self.invert[output.index()] = invert;
        self
    }

    pub fn source(&self, output: Channel) -> Channel {
        self.sources[output.index()]
    }

    pub fn inverted(&self, output: Channel) -> bool {
        self.invert[output.index()]
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }
}

impl fmt::Display for ChannelMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, output) in Channel::ALL.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}<-{}", output, self.source(*output))?;
            if self.inverted(*output) {
                f.write_str("'")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_channel_names() {
        assert_eq!("r".parse::<Channel>().unwrap(), Channel::R);
        assert_eq!("Green".parse::<Channel>().unwrap(), Channel::G);
        assert_eq!(" B ".parse::<Channel>().unwrap(), Channel::B);
        assert_eq!("ALPHA".parse::<Channel>().unwrap(), Channel::A);
        assert!(matches!(
            "x".parse::<Channel>(),
            Err(TransformError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_fan_out_routing() {
        let map = ChannelMap::identity()
            .with_source(Channel::G, Channel::R)
            .with_source(Channel::B, Channel::R)
            .with_invert(Channel::A, true);

        assert_eq!(map.source(Channel::R), Channel::R);
        assert_eq!(map.source(Channel::G), Channel::R);
        assert_eq!(map.source(Channel::B), Channel::R);
        assert!(map.inverted(Channel::A));
        assert!(!map.inverted(Channel::R));
        assert!(!map.is_identity());
        assert_eq!(map.to_string(), "R<-R G<-R B<-R A<-A'");
    }
}
