//! Unit tests mirroring the source tree under `tests/unit`
