mod aggregation;
mod mapping;
mod topology;
