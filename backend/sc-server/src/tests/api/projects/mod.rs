mod project_dto;
mod project_input;
