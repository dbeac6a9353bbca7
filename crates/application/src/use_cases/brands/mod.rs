mod create_brand;
mod delete_brand;
mod get_brands;
mod update_brand;

pub use create_brand::CreateBrandUseCase;
pub use delete_brand::DeleteBrandUseCase;
pub use get_brands::GetBrandsUseCase;
pub use update_brand::UpdateBrandUseCase;
