mod navigation;
mod pricing;
