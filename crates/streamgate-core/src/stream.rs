//! Managed stream types.
//!
//! A stream type owns the `<name>.<suffix>` namespace of substream indices.
//! The set is closed and declared once through `stream_types!`, which emits
//! the enum, [`StreamType::ALL`], and the name mapping from the same list, so
//! a new variant cannot be left out of the policy loop.

macro_rules! stream_types {
    ($($(#[$attr:meta])* $variant:ident => $name:literal),+ $(,)?) => {
        /// Closed set of stream types known to the cluster.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum StreamType {
            $($(#[$attr])* $variant,)+
        }

        impl StreamType {
            /// Every stream type, in declaration order.
            pub const ALL: &'static [StreamType] = &[$(StreamType::$variant),+];

            /// Canonical stream name, also the root index of the stream.
            pub const fn stream_name(self) -> &'static str {
                match self {
                    $(StreamType::$variant => $name,)+
                }
            }
        }
    };
}

stream_types! {
    /// Log streams rooted at the `logs` index.
    Logs => "logs",
}

impl StreamType {
    /// True if `index` is `<stream_name>.<anything>`.
    pub fn is_substream(self, index: &str) -> bool {
        index
            .strip_prefix(self.stream_name())
            .is_some_and(|rest| rest.starts_with('.'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substream_requires_dot_after_name() {
        assert!(StreamType::Logs.is_substream("logs.nginx"));
        assert!(StreamType::Logs.is_substream("logs."));
        assert!(!StreamType::Logs.is_substream("logs"));
        assert!(!StreamType::Logs.is_substream("logs-nginx"));
        assert!(!StreamType::Logs.is_substream(""));
        assert!(!StreamType::Logs.is_substream("metrics.logs"));
    }

    #[test]
    fn all_lists_every_variant_once() {
        for t in StreamType::ALL {
            // Exhaustive on purpose: a new variant must be named here.
            let expected = match t {
                StreamType::Logs => "logs",
            };
            assert_eq!(t.stream_name(), expected);
            assert_eq!(StreamType::ALL.iter().filter(|o| *o == t).count(), 1);
        }
        assert!(StreamType::ALL.contains(&StreamType::Logs));
    }

    #[test]
    fn stream_namespaces_are_disjoint() {
        for a in StreamType::ALL {
            for b in StreamType::ALL {
                if a != b {
                    assert!(!a.is_substream(b.stream_name()), "{a:?} overlaps {b:?}");
                    assert_ne!(a.stream_name(), b.stream_name());
                }
            }
        }
    }
}
