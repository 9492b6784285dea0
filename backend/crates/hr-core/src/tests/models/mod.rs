mod new_employee;
mod page_request;
mod patch;
