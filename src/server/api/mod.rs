// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod goals;
pub mod health;
pub mod profile;
pub mod reports;
pub mod transactions;
pub mod users;
