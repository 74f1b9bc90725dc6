// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use super::{DatasetHandle, select_columns};
use crate::error::Result;
use crate::schema::Schema;
use arrow_array::RecordBatch;

/// A dataset held in memory as one batch
#[derive(Debug, Clone)]
pub struct MemoryDataset {
    batch: RecordBatch,
}

impl MemoryDataset {
    #[must_use]
    pub fn new(batch: RecordBatch) -> Self {
        Self { batch }
    }

    #[must_use]
    pub fn batch(&self) -> &RecordBatch {
        &self.batch
    }
}

impl DatasetHandle for MemoryDataset {
    fn read_schema(&self) -> Result<Schema> {
        Schema::from_arrow(&self.batch.schema())
    }

    fn read_columns(&self, names: &[String]) -> Result<RecordBatch> {
        select_columns(&self.batch, names)
    }
}
