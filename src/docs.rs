use crate::api::attendance::{AttendanceResponse, CreateAttendance, LastRecordResponse};
use crate::api::employee::{CreateEmployee, UpdateEmployee};
use crate::error::ErrorBody;
use crate::model::attendance::{AttendanceRecord, RecordType};
use crate::model::employee::Employee;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Attendance Log API",
        version = "0.1.0",
        description = r#"
## Employee Attendance Log

Registers employees and records their check-in / check-out events.

- **Employees**: create, update, list active, view by id
- **Attendance**: record an event stamped with the server clock, read an employee's last record

Errors are returned as `{"detail": "..."}` with the matching status code.
"#,
    ),
    paths(
        crate::api::employee::list_employees,
        crate::api::employee::get_employee,
        crate::api::employee::create_employee,
        crate::api::employee::update_employee,

        crate::api::attendance::record_attendance,
        crate::api::attendance::last_record,
    ),
    components(
        schemas(
            Employee,
            CreateEmployee,
            UpdateEmployee,
            AttendanceRecord,
            RecordType,
            CreateAttendance,
            AttendanceResponse,
            LastRecordResponse,
            ErrorBody
        )
    ),
    tags(
        (name = "Employee", description = "Employee directory APIs"),
        (name = "Attendance", description = "Attendance logging APIs"),
    )
)]
pub struct ApiDoc;
