// SPDX-FileCopyrightText: © 2019 Robin Ole Heinemann <robin.ole.heinemann@gmail.com>
// SPDX-License-Identifier: AGPL-3.0-only

pub fn bool_false() -> bool { false }

pub fn bool_true() -> bool { true }
