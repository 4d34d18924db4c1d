use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::models::department::{DepartmentInput, DepartmentPatch};
use crate::repositories::DepartmentRepository;
use crate::utils::validation::{parse_id, validate_payload};

pub async fn get_departments(
    repo: web::Data<DepartmentRepository>,
) -> Result<HttpResponse, actix_web::Error> {
    let departments = repo.get_all().await?;
    Ok(HttpResponse::Ok().json(departments))
}

pub async fn get_department(
    repo: web::Data<DepartmentRepository>,
    d_no: web::Path<String>,
) -> Result<HttpResponse, actix_web::Error> {
    let d_no = parse_id(&d_no, "department")?;
    let department = repo.get(d_no).await?;
    Ok(HttpResponse::Ok().json(department))
}

pub async fn create_department(
    repo: web::Data<DepartmentRepository>,
    new_department: web::Json<DepartmentInput>,
) -> Result<HttpResponse, actix_web::Error> {
    validate_payload(&*new_department)?;

    let department = new_department.into_inner().into_department(Uuid::new_v4());
    repo.add(&department).await?;

    let created = repo.get(department.d_no).await?;
    Ok(HttpResponse::Created().json(created))
}

/// PATCH: any subset of fields.
pub async fn update_department(
    repo: web::Data<DepartmentRepository>,
    d_no: web::Path<String>,
    updates: web::Json<DepartmentPatch>,
) -> Result<HttpResponse, actix_web::Error> {
    validate_payload(&*updates)?;
    let d_no = parse_id(&d_no, "department")?;

    let updated = repo.update(d_no, updates.into_inner()).await?;
    Ok(HttpResponse::Ok().json(updated))
}

/// PUT: the full field set, merged the same way as PATCH.
pub async fn replace_department(
    repo: web::Data<DepartmentRepository>,
    d_no: web::Path<String>,
    replacement: web::Json<DepartmentInput>,
) -> Result<HttpResponse, actix_web::Error> {
    validate_payload(&*replacement)?;
    let d_no = parse_id(&d_no, "department")?;

    let updated = repo.update(d_no, replacement.into_inner().into()).await?;
    Ok(HttpResponse::Ok().json(updated))
}

pub async fn delete_department(
    repo: web::Data<DepartmentRepository>,
    d_no: web::Path<String>,
) -> Result<HttpResponse, actix_web::Error> {
    let d_no = parse_id(&d_no, "department")?;
    repo.delete(d_no).await?;
    Ok(HttpResponse::NoContent().finish())
}
