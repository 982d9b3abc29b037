//! Workspace-level integration tests for DutyDraw live under `tests/`.
