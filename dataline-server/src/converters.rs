//! Mapping between persisted config models and API models.

use config_persistence::{
    Column, DataType, Schedule, Schema, SyncMode, SyncStatus, Table, TimeUnit,
};
use dataline_api as api;

pub fn to_api_status(status: SyncStatus) -> api::ConnectionStatus {
    match status {
        SyncStatus::Active => api::ConnectionStatus::Active,
        SyncStatus::Inactive => api::ConnectionStatus::Inactive,
        SyncStatus::Deprecated => api::ConnectionStatus::Deprecated,
    }
}

pub fn to_persisted_status(status: api::ConnectionStatus) -> SyncStatus {
    match status {
        api::ConnectionStatus::Active => SyncStatus::Active,
        api::ConnectionStatus::Inactive => SyncStatus::Inactive,
        api::ConnectionStatus::Deprecated => SyncStatus::Deprecated,
    }
}

pub fn to_api_sync_mode(mode: SyncMode) -> api::SyncMode {
    match mode {
        SyncMode::FullRefresh => api::SyncMode::FullRefresh,
        SyncMode::Append => api::SyncMode::Append,
    }
}

pub fn to_persisted_sync_mode(mode: api::SyncMode) -> SyncMode {
    match mode {
        api::SyncMode::FullRefresh => SyncMode::FullRefresh,
        api::SyncMode::Append => SyncMode::Append,
    }
}

fn to_api_time_unit(unit: TimeUnit) -> api::TimeUnit {
    match unit {
        TimeUnit::Minutes => api::TimeUnit::Minutes,
        TimeUnit::Hours => api::TimeUnit::Hours,
        TimeUnit::Days => api::TimeUnit::Days,
        TimeUnit::Weeks => api::TimeUnit::Weeks,
        TimeUnit::Months => api::TimeUnit::Months,
    }
}

fn to_persisted_time_unit(unit: api::TimeUnit) -> TimeUnit {
    match unit {
        api::TimeUnit::Minutes => TimeUnit::Minutes,
        api::TimeUnit::Hours => TimeUnit::Hours,
        api::TimeUnit::Days => TimeUnit::Days,
        api::TimeUnit::Weeks => TimeUnit::Weeks,
        api::TimeUnit::Months => TimeUnit::Months,
    }
}

pub fn to_api_schedule(schedule: Schedule) -> api::ConnectionSchedule {
    api::ConnectionSchedule {
        units: schedule.units,
        time_unit: to_api_time_unit(schedule.time_unit),
    }
}

pub fn to_persisted_schedule(schedule: api::ConnectionSchedule) -> Schedule {
    Schedule {
        units: schedule.units,
        time_unit: to_persisted_time_unit(schedule.time_unit),
    }
}

fn to_api_data_type(data_type: DataType) -> api::DataType {
    match data_type {
        DataType::String => api::DataType::String,
        DataType::Number => api::DataType::Number,
        DataType::Boolean => api::DataType::Boolean,
    }
}

fn to_persisted_data_type(data_type: api::DataType) -> DataType {
    match data_type {
        api::DataType::String => DataType::String,
        api::DataType::Number => DataType::Number,
        api::DataType::Boolean => DataType::Boolean,
    }
}

pub fn to_api_schema(schema: &Schema) -> api::SourceSchema {
    api::SourceSchema {
        tables: schema
            .tables
            .iter()
            .map(|table| api::SourceSchemaTable {
                name: table.name.clone(),
                selected: table.selected,
                columns: table
                    .columns
                    .iter()
                    .map(|column| api::SourceSchemaColumn {
                        name: column.name.clone(),
                        data_type: to_api_data_type(column.data_type),
                        selected: column.selected,
                    })
                    .collect(),
            })
            .collect(),
    }
}

pub fn to_persisted_schema(schema: &api::SourceSchema) -> Schema {
    Schema {
        tables: schema
            .tables
            .iter()
            .map(|table| Table {
                name: table.name.clone(),
                selected: table.selected,
                columns: table
                    .columns
                    .iter()
                    .map(|column| Column {
                        name: column.name.clone(),
                        data_type: to_persisted_data_type(column.data_type),
                        selected: column.selected,
                    })
                    .collect(),
            })
            .collect(),
    }
}
