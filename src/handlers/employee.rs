use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::models::employee::{EmployeeInput, EmployeePatch};
use crate::repositories::EmployeeRepository;
use crate::utils::validation::{parse_id, validate_payload};

pub async fn get_employees(
    repo: web::Data<EmployeeRepository>,
) -> Result<HttpResponse, actix_web::Error> {
    let employees = repo.get_all().await?;
    Ok(HttpResponse::Ok().json(employees))
}

pub async fn get_employee(
    repo: web::Data<EmployeeRepository>,
    e_no: web::Path<String>,
) -> Result<HttpResponse, actix_web::Error> {
    let e_no = parse_id(&e_no, "employee")?;
    let employee = repo.get(e_no).await?;
    Ok(HttpResponse::Ok().json(employee))
}

pub async fn create_employee(
    repo: web::Data<EmployeeRepository>,
    new_employee: web::Json<EmployeeInput>,
) -> Result<HttpResponse, actix_web::Error> {
    validate_payload(&*new_employee)?;

    let employee = new_employee.into_inner().into_employee(Uuid::new_v4());
    repo.add(&employee).await?;

    let created = repo.get(employee.e_no).await?;
    Ok(HttpResponse::Created().json(created))
}

pub async fn update_employee(
    repo: web::Data<EmployeeRepository>,
    e_no: web::Path<String>,
    updates: web::Json<EmployeePatch>,
) -> Result<HttpResponse, actix_web::Error> {
    validate_payload(&*updates)?;
    let e_no = parse_id(&e_no, "employee")?;

    let updated = repo.update(e_no, updates.into_inner()).await?;
    Ok(HttpResponse::Ok().json(updated))
}

pub async fn replace_employee(
    repo: web::Data<EmployeeRepository>,
    e_no: web::Path<String>,
    replacement: web::Json<EmployeeInput>,
) -> Result<HttpResponse, actix_web::Error> {
    validate_payload(&*replacement)?;
    let e_no = parse_id(&e_no, "employee")?;

    let updated = repo.update(e_no, replacement.into_inner().into()).await?;
    Ok(HttpResponse::Ok().json(updated))
}

pub async fn delete_employee(
    repo: web::Data<EmployeeRepository>,
    e_no: web::Path<String>,
) -> Result<HttpResponse, actix_web::Error> {
    let e_no = parse_id(&e_no, "employee")?;
    repo.delete(e_no).await?;
    Ok(HttpResponse::NoContent().finish())
}
